//! Provider abstraction over remote text-generation backends.
//!
//! Uses `Box<dyn Provider>` for runtime polymorphism, so the orchestrator
//! and both presentation surfaces work against one contract regardless of
//! which vendor is active. New backends are added by implementing
//! [`Provider`] and registering an alias in [`build`]; nothing upstream
//! changes.

pub mod asi1;
pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::Settings;
use crate::error::{Error, ProviderError};

pub use asi1::Asi1Provider;
pub use openai::OpenAiProvider;

/// Names accepted by [`build`], in the order they are listed to users.
pub const AVAILABLE: &[&str] = &["asi1", "openai", "chatgpt"];

/// Backend tried when the requested provider cannot be constructed.
pub const FALLBACK: &str = "asi1";

/// A remote text-generation backend: send one prompt, get one reply.
///
/// Implementations make exactly one outbound HTTP call per `call`
/// invocation, never retry, and report failures through the explicit
/// [`ProviderError`] channel instead of raising or smuggling error text
/// into the reply.
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Canonical registry id (`"asi1"`, `"openai"`).
    fn id(&self) -> &'static str;

    /// Vendor label used in user-facing output.
    fn display_name(&self) -> &'static str;

    /// Send the prompt and return the generated reply text.
    async fn call(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Resolve a case-insensitive backend name to a constructed provider.
///
/// Construction reads credentials from `settings`; a missing credential
/// surfaces as [`Error::MissingCredential`]. An unrecognized name fails
/// with [`Error::UnknownProvider`] enumerating the valid names.
pub fn build(name: &str, settings: &Settings) -> Result<Box<dyn Provider>, Error> {
    match name.to_lowercase().as_str() {
        "asi1" => Ok(Box::new(Asi1Provider::new(settings)?)),
        "openai" | "chatgpt" => Ok(Box::new(OpenAiProvider::new(settings)?)),
        _ => Err(Error::UnknownProvider {
            name: name.to_string(),
            available: AVAILABLE.join(", "),
        }),
    }
}

/// One role-tagged entry in a chat-completion request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

/// Message roles understood by both vendors' chat endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
    System,
    User,
}

/// Pull the reply text out of a chat-completion response body.
///
/// Both vendors document the same extraction path; any deviation is a
/// response-shape failure.
pub(crate) fn extract_reply(
    provider: &'static str,
    body: &Value,
) -> Result<String, ProviderError> {
    body.pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .ok_or_else(|| ProviderError::MalformedResponse {
            provider,
            detail: "missing choices[0].message.content".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings_with_both_keys() -> Settings {
        Settings {
            openai_api_key: Some("sk-test".into()),
            asi1_api_key: Some("asi-test".into()),
            ..Settings::default()
        }
    }

    #[test]
    fn test_registry_resolves_canonical_names() {
        let settings = settings_with_both_keys();
        assert_eq!(build("asi1", &settings).unwrap().id(), "asi1");
        assert_eq!(build("openai", &settings).unwrap().id(), "openai");
    }

    #[test]
    fn test_registry_alias_maps_to_same_backend() {
        let settings = settings_with_both_keys();
        let canonical = build("openai", &settings).unwrap();
        let alias = build("chatgpt", &settings).unwrap();
        assert_eq!(alias.id(), canonical.id());
        assert_eq!(alias.display_name(), canonical.display_name());
    }

    #[test]
    fn test_registry_is_case_insensitive() {
        let settings = settings_with_both_keys();
        assert_eq!(build("OpenAI", &settings).unwrap().id(), "openai");
        assert_eq!(build("CHATGPT", &settings).unwrap().id(), "openai");
        assert_eq!(build("Asi1", &settings).unwrap().id(), "asi1");
    }

    #[test]
    fn test_registry_unknown_name_enumerates_available() {
        let settings = settings_with_both_keys();
        let err = build("grok", &settings).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("'grok'"));
        for name in AVAILABLE {
            assert!(text.contains(name), "missing {name} in: {text}");
        }
    }

    #[test]
    fn test_registry_unknown_name_case_variants_fail_identically() {
        let settings = settings_with_both_keys();
        let lower = build("unknown", &settings).unwrap_err().to_string();
        let upper = build("UNKNOWN", &settings).unwrap_err().to_string();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_extract_reply_success() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "Kaizen."}}]
        });
        assert_eq!(extract_reply("OpenAI", &body).unwrap(), "Kaizen.");
    }

    #[test]
    fn test_extract_reply_missing_field() {
        let body = json!({"choices": []});
        let err = extract_reply("ASI1 Mini", &body).unwrap_err();
        assert!(err.to_string().starts_with("Invalid response from ASI1 Mini API"));
    }

    #[test]
    fn test_chat_message_serializes_lowercase_roles() {
        let msg = ChatMessage {
            role: Role::System,
            content: "be brief",
        };
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v, json!({"role": "system", "content": "be brief"}));
    }
}
