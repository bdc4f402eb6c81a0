//! Advisory AI adapter.
//!
//! The adapter sends the already-authoritative findings plus read-only code
//! context to an external chat-completion endpoint and returns explanatory
//! content. Two gates hold before any network traffic: the caller must have
//! opted in, and findings must exist. Advisory output is never merged back
//! into authoritative state, and every advisory failure is recoverable —
//! the worst case is `ai: {enabled: false}` on the report.

pub mod mock;
pub mod prompts;
pub mod provider;
pub mod schemas;

pub use mock::MockChatProvider;
pub use provider::{AdvisoryError, ChatProvider, ChatRequest, ChatResponse, HttpChatProvider};
pub use schemas::{AdvisoryResult, CodeSuggestion, Explanation, Hypothesis, HypothesisConfidence};

use crate::audit::AuditLog;
use crate::config::AdvisoryConfig;
use crate::core::Finding;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

pub struct Advisor {
    provider: Arc<dyn ChatProvider>,
    audit: AuditLog,
    temperature: f32,
    max_tokens: u32,
    timeout_seconds: u64,
}

impl Advisor {
    pub fn new(provider: Arc<dyn ChatProvider>, audit: AuditLog) -> Self {
        let defaults = AdvisoryConfig::default();
        Self {
            provider,
            audit,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            timeout_seconds: defaults.timeout_seconds,
        }
    }

    pub fn with_config(mut self, config: &AdvisoryConfig) -> Self {
        self.temperature = config.temperature;
        self.max_tokens = config.max_tokens;
        self.timeout_seconds = config.timeout_seconds;
        self
    }

    /// Run the advisory pass over an authoritative finding set.
    ///
    /// Rejects before any network call when `use_ai` is false or `findings`
    /// is empty. A response that is not strict JSON in the contract shape
    /// resolves to a safe placeholder rather than an error.
    pub async fn advise(
        &self,
        content: &str,
        language: &str,
        findings: &[Finding],
        use_ai: bool,
    ) -> Result<AdvisoryResult, AdvisoryError> {
        if !use_ai {
            return Err(AdvisoryError::OptInRequired);
        }
        if findings.is_empty() {
            return Err(AdvisoryError::NoFindings);
        }

        let request = ChatRequest {
            system_prompt: prompts::system_prompt(),
            user_prompt: prompts::user_prompt(language, findings, content),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        self.audit.record(
            "ai_request_start",
            json!({ "model": self.provider.model_name(), "findings": findings.len() }),
        );

        let started = Instant::now();
        let outcome = tokio::time::timeout(
            Duration::from_secs(self.timeout_seconds),
            self.provider.complete(request),
        )
        .await
        .unwrap_or(Err(AdvisoryError::Timeout(self.timeout_seconds)));

        let duration_ms = started.elapsed().as_millis() as u64;

        let response = match outcome {
            Ok(response) => {
                self.audit.record(
                    "ai_request_success",
                    json!({ "durationMs": duration_ms, "model": response.model }),
                );
                response
            }
            Err(err) => {
                warn!(kind = err.kind(), "advisory request failed");
                self.audit.record(
                    "ai_request_failed",
                    json!({ "errorType": err.kind(), "durationMs": duration_ms }),
                );
                return Err(err);
            }
        };

        match serde_json::from_str::<AdvisoryResult>(&response.content) {
            Ok(parsed) => {
                self.audit.record("ai_parse_success", json!({}));
                Ok(parsed)
            }
            Err(err) => {
                warn!(error = %err, "advisory response was not contract-shaped JSON");
                self.audit.record(
                    "ai_parse_failed",
                    json!({
                        "error": err.to_string(),
                        "rawSnippet": response.content.chars().take(100).collect::<String>(),
                    }),
                );
                Ok(AdvisoryResult::placeholder())
            }
        }
    }
}
