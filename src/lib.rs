//! # lean-assist
//!
//! AI-powered guidance for Lean manufacturing frameworks, routed over
//! interchangeable remote text-generation backends.
//!
//! ## Overview
//!
//! The assistant builds structured natural-language prompts from a small
//! set of user selections (framework, industry, optional free-text
//! question) and dispatches them to one of two HTTP backends behind a
//! uniform [`provider::Provider`] contract. Transport and response-shape
//! failures come back through an explicit error channel rather than being
//! folded into the reply text, so hosts decide how to render them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lean_assist::{run_assistant, Settings};
//!
//! #[tokio::main]
//! async fn main() -> lean_assist::Result<()> {
//!     let settings = Settings::from_env();
//!     let reply = run_assistant(
//!         "Toyota Production System (TPS)",
//!         "Automotive",
//!         "openai",
//!         "How do I reduce waste on my assembly line?",
//!         &settings,
//!     )
//!     .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`prompt`] | Pure prompt template builders |
//! | [`provider`] | Provider trait, registry, and the two backends |
//! | [`assistant`] | Orchestration: fallback init, selection, dispatch |
//! | [`console`] | Interactive console loop |
//! | [`config`] | Environment-derived configuration snapshot |
//! | [`framework`] | The fixed framework set and menu parsing |

pub mod assistant;
pub mod config;
pub mod console;
pub mod error;
pub mod framework;
pub mod prompt;
pub mod provider;

// Re-export main types for convenience
pub use assistant::{process_framework_selection, run_assistant, Assistant};
pub use config::Settings;
pub use error::{Error, ProviderError};
pub use framework::{Framework, FrameworkChoice, APP_NAME, INDUSTRY_EXAMPLES};
pub use provider::Provider;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
