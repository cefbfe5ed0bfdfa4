//! OpenAI chat-completions backend, the primary vendor. Differs from the
//! ASI1 wire format in three ways: a fixed system-role instruction rides
//! along with the user prompt, and bounded output length plus a fixed
//! sampling temperature are sent as generation parameters.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::Settings;
use crate::error::{Error, ProviderError};

use super::{extract_reply, ChatMessage, Provider, Role};

/// Default chat-completions endpoint, overridable via
/// `Settings::openai_api_url`.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const MODEL: &str = "gpt-4o";
const VENDOR: &str = "OpenAI";
const TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f64 = 0.7;

const SYSTEM_PROMPT: &str = "You are an expert Lean manufacturing consultant with deep \
     knowledge of TPS, FPS, SPW, and Lean Six Sigma frameworks. Provide practical, \
     actionable advice for factory floor optimization.";

/// OpenAI chat-completions provider.
#[derive(Debug)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OpenAiProvider {
    /// Construct from the configuration snapshot. Fails when the
    /// credential is absent or empty, regardless of endpoint override.
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let api_key = settings
            .openai_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .map(str::to_owned)
            .ok_or(Error::MissingCredential {
                provider: "openai",
                variable: "OPENAI_API_KEY",
            })?;

        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| Error::ProviderInit {
                provider: "openai",
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_url: settings
                .openai_api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            api_key,
        })
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn id(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        VENDOR
    }

    async fn call(&self, prompt: &str) -> Result<String, ProviderError> {
        let payload = json!({
            "model": MODEL,
            "messages": [
                ChatMessage { role: Role::System, content: SYSTEM_PROMPT },
                ChatMessage { role: Role::User, content: prompt },
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        tracing::debug!(provider = self.id(), prompt_len = prompt.len(), "dispatching prompt");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| {
                tracing::warn!(provider = self.id(), error = %source, "request failed");
                ProviderError::Request {
                    provider: VENDOR,
                    source,
                }
            })?;

        let body: Value =
            response
                .json()
                .await
                .map_err(|e| ProviderError::MalformedResponse {
                    provider: VENDOR,
                    detail: e.to_string(),
                })?;

        extract_reply(VENDOR, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_requires_credential() {
        let settings = Settings {
            openai_api_url: Some("http://localhost:9000".into()),
            ..Settings::default()
        };
        let err = OpenAiProvider::new(&settings).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingCredential {
                variable: "OPENAI_API_KEY",
                ..
            }
        ));
    }

    #[test]
    fn test_endpoint_default_and_override() {
        let default = OpenAiProvider::new(&Settings {
            openai_api_key: Some("sk-k".into()),
            ..Settings::default()
        })
        .unwrap();
        assert_eq!(default.api_url, DEFAULT_API_URL);

        let overridden = OpenAiProvider::new(&Settings {
            openai_api_key: Some("sk-k".into()),
            openai_api_url: Some("http://localhost:4010/v1/chat/completions".into()),
            ..Settings::default()
        })
        .unwrap();
        assert_eq!(overridden.api_url, "http://localhost:4010/v1/chat/completions");
    }

    #[test]
    fn test_system_prompt_names_all_frameworks() {
        for acronym in ["TPS", "FPS", "SPW", "Lean Six Sigma"] {
            assert!(SYSTEM_PROMPT.contains(acronym));
        }
    }
}
