//! ASI1 Mini backend. The simpler of the two wire formats: the payload
//! carries only the user-role message, with no system instruction and no
//! generation parameters.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::Settings;
use crate::error::{Error, ProviderError};

use super::{extract_reply, ChatMessage, Provider, Role};

/// Default chat endpoint, overridable via `Settings::asi1_api_url`.
pub const DEFAULT_API_URL: &str = "https://asi1.ai/chat";

const MODEL: &str = "asi1-mini";
const VENDOR: &str = "ASI1 Mini";
const TIMEOUT: Duration = Duration::from_secs(30);

/// ASI1 Mini API provider.
#[derive(Debug)]
pub struct Asi1Provider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl Asi1Provider {
    /// Construct from the configuration snapshot. Fails when the
    /// credential is absent or empty, regardless of endpoint override.
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let api_key = settings
            .asi1_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .map(str::to_owned)
            .ok_or(Error::MissingCredential {
                provider: "asi1",
                variable: "ASI1_MINI_API_KEY",
            })?;

        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| Error::ProviderInit {
                provider: "asi1",
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_url: settings
                .asi1_api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            api_key,
        })
    }
}

#[async_trait]
impl Provider for Asi1Provider {
    fn id(&self) -> &'static str {
        "asi1"
    }

    fn display_name(&self) -> &'static str {
        VENDOR
    }

    async fn call(&self, prompt: &str) -> Result<String, ProviderError> {
        let payload = json!({
            "model": MODEL,
            "messages": [ChatMessage { role: Role::User, content: prompt }],
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
