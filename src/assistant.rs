//! Assistant orchestration: provider init with fallback, framework
//! selection, prompt dispatch, and the follow-up bundles. Both
//! presentation surfaces (console loop and web-callable entry) route
//! through this module so the template/dispatch/fallback logic exists
//! exactly once.

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{Error, ProviderError};
use crate::framework::{Framework, FrameworkChoice};
use crate::prompt;
use crate::provider::{self, Provider};

/// Map a framework menu choice to the framework (if any) and the prompt
/// to dispatch: `"5"` yields the compare-all prompt with no framework,
/// `"1"`–`"4"` yield the guide prompt for the chosen framework, anything
/// else is an invalid selection. No provider call happens here.
pub fn process_framework_selection(
    choice: &str,
    industry: &str,
) -> Result<(Option<Framework>, String), Error> {
    match FrameworkChoice::parse(choice) {
        Some(FrameworkChoice::CompareAll) => Ok((None, prompt::framework_comparison(industry))),
        Some(FrameworkChoice::Single(framework)) => {
            Ok((Some(framework), prompt::framework_guide(framework, industry)))
        }
        None => Err(Error::InvalidSelection {
            choice: choice.to_string(),
        }),
    }
}

/// One assistant session bound to a constructed provider.
#[derive(Debug)]
pub struct Assistant {
    provider: Box<dyn Provider>,
}

impl Assistant {
    /// Construct with the requested provider. If that fails (unknown name
    /// or missing credential), try the fixed fallback once; if the
    /// fallback also fails the session is unusable.
    pub fn new(requested: &str, settings: &Settings) -> Result<Self, Error> {
        let provider = match provider::build(requested, settings) {
            Ok(p) => p,
            Err(err) => {
                warn!(requested, error = %err, "provider init failed, trying fallback");
                provider::build(provider::FALLBACK, settings).map_err(|fallback_err| {
                    warn!(error = %fallback_err, "fallback provider init failed");
                    Error::NoProviderAvailable
                })?
            }
        };
        info!(provider = provider.id(), "assistant ready");
        Ok(Self { provider })
    }

    /// Canonical id of the provider actually in use (which may be the
    /// fallback rather than the one requested).
    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// Vendor label of the active provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.display_name()
    }

    /// Dispatch one prompt to the active provider.
    pub async fn ask(&self, prompt: &str) -> Result<String, ProviderError> {
        self.provider.call(prompt).await
    }

    /// Follow-up bundle: implementation roadmap, then KPIs, concatenated
    /// for display.
    pub async fn implementation_plan(
        &self,
        framework: Framework,
        industry: &str,
    ) -> Result<String, ProviderError> {
        let roadmap = self
            .ask(&prompt::implementation_roadmap(framework, industry))
            .await?;
        let kpis = self.ask(&prompt::kpi_metrics(framework, industry)).await?;
        Ok(format!(
            "{roadmap}\n\nKEY PERFORMANCE INDICATORS\n{}\n{kpis}",
            "=".repeat(40)
        ))
    }

    /// Follow-up bundle: AI tool recommendations, then crisis
    /// communication integration, concatenated for display.
    pub async fn ai_toolkit(
        &self,
        framework: Framework,
        industry: &str,
    ) -> Result<String, ProviderError> {
        let tools = self
            .ask(&prompt::ai_tools_recommendation(framework, industry))
            .await?;
        let crisis = self.ask(&prompt::crisis_communication_integration()).await?;
        Ok(format!(
            "{tools}\n\nCRISIS COMMUNICATION INTEGRATION\n{}\n{crisis}",
            "=".repeat(45)
        ))
    }
}

/// Web-callable entry point: resolve the framework label, construct an
/// assistant (with fallback), build the prompt, dispatch once, and return
/// the reply. Suitable for embedding in a request/response handler; the
/// host renders any error via Display.
///
/// A blank `question` falls back to the framework guide prompt, so the
/// entry also serves hosts that only collect framework and industry.
pub async fn run_assistant(
    framework_label: &str,
    industry: &str,
    provider_name: &str,
    question: &str,
    settings: &Settings,
) -> Result<String, Error> {
    let framework =
        Framework::from_label(framework_label).ok_or_else(|| Error::InvalidSelection {
            choice: framework_label.to_string(),
        })?;

    let assistant = Assistant::new(provider_name, settings)?;

    let prompt = if question.trim().is_empty() {
        prompt::framework_guide(framework, industry)
    } else {
        prompt::open_question(framework, industry, question.trim())
    };

    Ok(assistant.ask(&prompt).await?)
}
