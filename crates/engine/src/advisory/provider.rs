//! Chat-completion provider abstraction and HTTP implementation.

use crate::config::AdvisoryConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Classified advisory failures. Every variant is non-fatal to the
/// authoritative analysis; the distinction exists for audit and diagnostics.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory blocked: user opt-in required")]
    OptInRequired,

    #[error("advisory blocked: authoritative findings missing")]
    NoFindings,

    #[error("advisory endpoint unavailable (connection refused)")]
    ConnectionRefused,

    #[error("advisory request timed out after {0} seconds")]
    Timeout(u64),

    #[error("advisory endpoint client error: HTTP {0}")]
    ClientError(u16),

    #[error("advisory endpoint server error: HTTP {0}")]
    ServerError(u16),

    #[error("invalid advisory response: {0}")]
    InvalidResponse(String),

    #[error("advisory request failed: {0}")]
    Other(String),
}

impl AdvisoryError {
    /// Stable label recorded in the audit log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OptInRequired => "opt_in_required",
            Self::NoFindings => "no_findings",
            Self::ConnectionRefused => "connection_refused",
            Self::Timeout(_) => "timeout",
            Self::ClientError(_) => "client_error",
            Self::ServerError(_) => "server_error",
            Self::InvalidResponse(_) => "invalid_response",
            Self::Other(_) => "unknown",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub model: String,
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AdvisoryError>;

    fn model_name(&self) -> &str;
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireChoiceMessage,
}

#[derive(Deserialize)]
struct WireChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<WireChoice>,
}

/// Provider speaking the OpenAI-compatible chat-completions protocol over
/// plain HTTP. One attempt per request; the timeout is the only bound.
pub struct HttpChatProvider {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    timeout_seconds: u64,
}

impl HttpChatProvider {
    pub fn new(config: &AdvisoryConfig) -> Result<Self, AdvisoryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AdvisoryError::Other(e.to_string()))?;

        Ok(Self {
            client,
            url: config.endpoint_url(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    fn classify(&self, err: reqwest::Error) -> AdvisoryError {
        if err.is_timeout() {
            return AdvisoryError::Timeout(self.timeout_seconds);
        }
        if err.is_connect() {
            return AdvisoryError::ConnectionRefused;
        }
        if let Some(status) = err.status() {
            if status.is_server_error() {
                return AdvisoryError::ServerError(status.as_u16());
            }
            if status.is_client_error() {
                return AdvisoryError::ClientError(status.as_u16());
            }
        }
        AdvisoryError::Other(err.to_string())
    }
}

#[async_trait]
impl ChatProvider for HttpChatProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AdvisoryError> {
        let body = WireRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(url = %self.url, model = %self.model, "sending advisory request");

        let mut http = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            http = http.bearer_auth(key);
        }

        let response = http.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        if status.is_server_error() {
            warn!(%status, "advisory endpoint server error");
            return Err(AdvisoryError::ServerError(status.as_u16()));
        }
        if status.is_client_error() {
            warn!(%status, "advisory endpoint client error");
            return Err(AdvisoryError::ClientError(status.as_u16()));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::InvalidResponse(e.to_string()))?;

        let content = wire
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                AdvisoryError::InvalidResponse("empty response from advisory endpoint".to_string())
            })?;

        Ok(ChatResponse {
            content,
            model: wire.model.unwrap_or_else(|| self.model.clone()),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_are_stable_labels() {
        assert_eq!(AdvisoryError::ConnectionRefused.kind(), "connection_refused");
        assert_eq!(AdvisoryError::Timeout(60).kind(), "timeout");
        assert_eq!(AdvisoryError::ServerError(502).kind(), "server_error");
        assert_eq!(AdvisoryError::ClientError(401).kind(), "client_error");
        assert_eq!(AdvisoryError::NoFindings.kind(), "no_findings");
    }

    #[test]
    fn wire_request_serializes_chat_shape() {
        let body = WireRequest {
            model: "test-model",
            messages: vec![WireMessage {
                role: "system",
                content: "rules",
            }],
            temperature: 0.2,
            max_tokens: 900,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["max_tokens"], 900);
    }

    #[test]
    fn wire_response_tolerates_missing_fields() {
        let wire: WireResponse = serde_json::from_str("{}").unwrap();
        assert!(wire.choices.is_empty());
        assert!(wire.model.is_none());
    }
}
