//! End-to-end orchestrator tests: fallback initialization, the
//! web-callable entry point, and the follow-up bundles, against a mock
//! HTTP server.

use lean_assist::assistant::{run_assistant, Assistant};
use lean_assist::config::Settings;
use lean_assist::error::Error;
use lean_assist::framework::Framework;
use mockito::Matcher;

fn asi1_settings(url: &str) -> Settings {
    Settings {
        asi1_api_key: Some("asi-test-key".into()),
        asi1_api_url: Some(url.to_string()),
        ..Settings::default()
    }
}

fn reply_body(text: &str) -> String {
    format!(r#"{{"choices":[{{"message":{{"role":"assistant","content":"{text}"}}}}]}}"#)
}

#[tokio::test]
async fn test_run_assistant_forwards_question_to_provider() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Toyota Production System \\(TPS\\)".to_string()),
            Matcher::Regex("Automotive".to_string()),
            Matcher::Regex("How do I cut changeover time".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("Apply SMED to the bottleneck press."))
        .create_async()
        .await;

    let reply = run_assistant(
        "Toyota Production System (TPS)",
        "Automotive",
        "asi1",
        "How do I cut changeover time?",
        &asi1_settings(&server.url()),
    )
    .await
    .unwrap();

    assert_eq!(reply, "Apply SMED to the bottleneck press.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_run_assistant_blank_question_uses_guide_prompt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Regex("Create interactive guide".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("Here is your guide."))
        .create_async()
        .await;

    let reply = run_assistant(
        "LSS",
        "Biotech",
        "asi1",
        "   ",
        &asi1_settings(&server.url()),
    )
    .await
    .unwrap();

    assert_eq!(reply, "Here is your guide.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_run_assistant_rejects_unknown_framework_without_dispatch() {
    let err = run_assistant(
        "Total Quality Management",
        "Automotive",
        "asi1",
        "question",
        &asi1_settings("http://127.0.0.1:1/"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::InvalidSelection { .. }));
}

#[tokio::test]
async fn test_run_assistant_propagates_provider_failure() {
    let err = run_assistant(
        "Toyota Production System (TPS)",
        "Automotive",
        "asi1",
        "question",
        &asi1_settings("http://127.0.0.1:1/"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Provider(_)));
    assert!(
        err.to_string().starts_with("Error contacting ASI1 Mini API"),
        "unexpected: {err}"
    );
}

#[tokio::test]
async fn test_fallback_provider_is_used_and_recorded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("Fallback answered."))
        .create_async()
        .await;

    // The requested provider has no credential configured; asi1 does.
    let settings = asi1_settings(&server.url());
    let assistant = Assistant::new("openai", &settings).unwrap();
    assert_eq!(assistant.provider_id(), "asi1");

    let reply = assistant.ask("anything").await.unwrap();
    assert_eq!(reply, "Fallback answered.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_implementation_plan_concatenates_roadmap_and_kpis() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("Section content."))
        .expect(2)
        .create_async()
        .await;

    let assistant = Assistant::new("asi1", &asi1_settings(&server.url())).unwrap();
    let plan = assistant
        .implementation_plan(Framework::FordProductionSystem, "Aerospace")
        .await
        .unwrap();

    assert_eq!(plan.matches("Section content.").count(), 2);
    assert!(plan.contains("KEY PERFORMANCE INDICATORS"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ai_toolkit_concatenates_tools_and_crisis_guidance() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("Tooling advice."))
        .expect(2)
        .create_async()
        .await;

    let assistant = Assistant::new("asi1", &asi1_settings(&server.url())).unwrap();
    let toolkit = assistant
        .ai_toolkit(Framework::LeanSixSigma, "Chemicals")
        .await
        .unwrap();

    assert_eq!(toolkit.matches("Tooling advice.").count(), 2);
    assert!(toolkit.contains("CRISIS COMMUNICATION INTEGRATION"));
    mock.assert_async().await;
}
