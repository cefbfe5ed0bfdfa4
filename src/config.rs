//! Process-wide configuration, resolved once at startup.
//!
//! Providers receive a [`Settings`] reference instead of reading the
//! environment themselves, so tests can construct backends with synthetic
//! credentials and endpoint overrides.

use std::env;

/// Snapshot of the environment-derived configuration.
///
/// Built once via [`Settings::from_env`] before any provider is
/// constructed, and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Credential for the OpenAI backend (`OPENAI_API_KEY`).
    pub openai_api_key: Option<String>,
    /// Endpoint override for the OpenAI backend (`OPENAI_API_URL`).
    pub openai_api_url: Option<String>,
    /// Credential for the ASI1 Mini backend (`ASI1_MINI_API_KEY`).
    pub asi1_api_key: Option<String>,
    /// Endpoint override for the ASI1 Mini backend (`ASI1_MINI_API_URL`).
    pub asi1_api_url: Option<String>,
    /// Provider requested when the host names none (`AI_PROVIDER`).
    pub default_provider: Option<String>,
}

impl Settings {
    /// Read all configuration values from the process environment.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env_nonempty("OPENAI_API_KEY"),
            openai_api_url: env_nonempty("OPENAI_API_URL"),
            asi1_api_key: env_nonempty("ASI1_MINI_API_KEY"),
            asi1_api_url: env_nonempty("ASI1_MINI_API_URL"),
            default_provider: env_nonempty("AI_PROVIDER"),
        }
    }

    /// The provider to use when the host does not name one.
    pub fn default_provider(&self) -> &str {
        self.default_provider.as_deref().unwrap_or("openai")
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
