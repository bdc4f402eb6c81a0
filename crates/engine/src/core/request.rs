use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hard cap on submitted content, enforced before any engine work runs.
pub const MAX_CONTENT_LENGTH: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Code,
    Api,
    Sql,
    Config,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => write!(f, "code"),
            Self::Api => write!(f, "api"),
            Self::Sql => write!(f, "sql"),
            Self::Config => write!(f, "config"),
        }
    }
}

impl std::str::FromStr for InputKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(Self::Code),
            "api" => Ok(Self::Api),
            "sql" => Ok(Self::Sql),
            "config" => Ok(Self::Config),
            _ => Err(()),
        }
    }
}

/// A single analysis submission. Immutable once accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub kind: InputKind,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub declared_language: Option<String>,

    #[serde(rename = "useAI")]
    #[serde(default)]
    pub use_ai: bool,
}

impl AnalysisRequest {
    /// Validate and accept a submission. Rejection here is the
    /// `InputRejected` class: nothing in the engine has run yet.
    pub fn new(kind: InputKind, content: impl Into<String>) -> Result<Self, EngineError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(EngineError::InputRejected(
                "content is required".to_string(),
            ));
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(EngineError::InputRejected(format!(
                "content exceeds {} characters",
                MAX_CONTENT_LENGTH
            )));
        }
        Ok(Self {
            kind,
            content,
            declared_language: None,
            use_ai: false,
        })
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.declared_language = Some(language.into());
        self
    }

    pub fn with_ai(mut self, use_ai: bool) -> Self {
        self.use_ai = use_ai;
        self
    }
}
