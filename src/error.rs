use thiserror::Error;

/// Unified error type for assistant construction, provider resolution,
/// and selection handling.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Please set your {variable} environment variable")]
    MissingCredential {
        provider: &'static str,
        variable: &'static str,
    },

    #[error("Failed to initialize provider '{provider}': {message}")]
    ProviderInit {
        provider: &'static str,
        message: String,
    },

    #[error("Unknown provider '{name}'. Available: {available}")]
    UnknownProvider { name: String, available: String },

    #[error("Invalid framework selection '{choice}'")]
    InvalidSelection { choice: String },

    #[error("No AI provider available. Please check your API keys.")]
    NoProviderAvailable,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single provider call, split by category so callers can
/// distinguish "the transport failed" from "the body was not what the
/// vendor documents". The Display text matches what the presentation
/// layers print in place of a reply.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection failure, timeout, or non-success HTTP status.
    #[error("Error contacting {provider} API: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not JSON, or the reply field is missing from it.
    #[error("Invalid response from {provider} API: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },
}

impl ProviderError {
    /// Vendor label of the backend that produced this failure.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Request { provider, .. } | Self::MalformedResponse { provider, .. } => provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_response_display() {
        let err = ProviderError::MalformedResponse {
            provider: "ASI1 Mini",
            detail: "missing choices[0].message.content".into(),
        };
        let text = err.to_string();
        assert!(text.starts_with("Invalid response from ASI1 Mini API"));
        assert!(text.contains("choices[0].message.content"));
    }

    #[test]
    fn test_unknown_provider_enumerates_names() {
        let err = Error::UnknownProvider {
            name: "grok".into(),
            available: "asi1, openai, chatgpt".into(),
        };
        let text = err.to_string();
        assert!(text.contains("'grok'"));
        assert!(text.contains("asi1, openai, chatgpt"));
    }

    #[test]
    fn test_missing_credential_names_variable() {
        let err = Error::MissingCredential {
            provider: "openai",
            variable: "OPENAI_API_KEY",
        };
        assert_eq!(
            err.to_string(),
            "Please set your OPENAI_API_KEY environment variable"
        );
    }
}
