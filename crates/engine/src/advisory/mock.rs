//! Scriptable in-process provider for tests.

use crate::advisory::provider::{AdvisoryError, ChatProvider, ChatRequest, ChatResponse};
use crate::advisory::schemas::AdvisoryResult;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockChatProvider {
    content: String,
    call_count: AtomicUsize,
    failure: Option<fn() -> AdvisoryError>,
}

impl MockChatProvider {
    /// Responds with a well-formed empty advisory result.
    pub fn new() -> Self {
        let empty = AdvisoryResult {
            explanation: crate::advisory::schemas::Explanation {
                summary: "No concerns beyond the reported findings.".to_string(),
                per_vulnerability: Default::default(),
            },
            ..Default::default()
        };
        Self::with_content(serde_json::to_string(&empty).expect("mock response"))
    }

    /// Responds with the given raw content (not necessarily valid JSON).
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            call_count: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// Fails every call with a connection-refused classification.
    pub fn failing() -> Self {
        let mut provider = Self::new();
        provider.failure = Some(|| AdvisoryError::ConnectionRefused);
        provider
    }

    /// Fails every call with a timeout classification.
    pub fn timing_out() -> Self {
        let mut provider = Self::new();
        provider.failure = Some(|| AdvisoryError::Timeout(60));
        provider
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, _request: ChatRequest) -> Result<ChatResponse, AdvisoryError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.failure {
            return Err(failure());
        }

        Ok(ChatResponse {
            content: self.content.clone(),
            model: "mock-model".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_counts_calls() {
        let provider = MockChatProvider::new();
        assert_eq!(provider.call_count(), 0);

        let request = ChatRequest {
            system_prompt: "rules".to_string(),
            user_prompt: "explain".to_string(),
            temperature: 0.2,
            max_tokens: 100,
        };
        provider.complete(request.clone()).await.unwrap();
        provider.complete(request).await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn failing_mock_classifies() {
        let provider = MockChatProvider::failing();
        let request = ChatRequest {
            system_prompt: String::new(),
            user_prompt: String::new(),
            temperature: 0.2,
            max_tokens: 100,
        };
        let err = provider.complete(request).await.unwrap_err();
        assert_eq!(err.kind(), "connection_refused");
    }
}
