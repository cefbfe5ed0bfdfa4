//! Console host for the Lean AI assistant.
//!
//! Usage:
//!   lean-assist-cli [PROVIDER]
//!
//! PROVIDER is an optional backend name (asi1, openai, chatgpt); when
//! omitted, the AI_PROVIDER environment variable or the built-in default
//! is used. If the named provider cannot be initialized the assistant
//! falls back to ASI1 Mini before giving up.

use lean_assist::{console, Settings};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!(
        r#"lean-assist-cli — interactive Lean manufacturing assistant

USAGE:
    lean-assist-cli [PROVIDER]

ARGS:
    PROVIDER    Backend to use: asi1, openai, or chatgpt
                (default: $AI_PROVIDER, then openai)

ENVIRONMENT:
    OPENAI_API_KEY        Credential for the OpenAI backend
    OPENAI_API_URL        Endpoint override for the OpenAI backend
    ASI1_MINI_API_KEY     Credential for the ASI1 Mini backend
    ASI1_MINI_API_URL     Endpoint override for the ASI1 Mini backend
    AI_PROVIDER           Default backend name
    RUST_LOG              Log filter (e.g. lean_assist=debug)"#
    );
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("lean-assist-cli {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let settings = Settings::from_env();
    let provider = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| settings.default_provider().to_string());

    if let Err(err) = console::run(&provider, &settings).await {
        eprintln!("Failed to start application: {err}");
        eprintln!();
        eprintln!("Troubleshooting tips:");
        eprintln!("1. Check your API keys in the environment");
        eprintln!("2. Ensure you have internet connectivity");
        eprintln!("3. Verify your API quotas/limits");
        std::process::exit(1);
    }
}
