//! Sentra Engine - Deterministic Static Security Analysis
//!
//! This crate implements the full analysis pipeline for submitted code, SQL,
//! and configuration text: syntax validation, input normalization,
//! pattern-based vulnerability detection, deterministic risk scoring,
//! derived attacker/defender/impact views, and an optional advisory AI pass
//! that is gated behind explicit opt-in and can never alter the
//! authoritative findings.

pub mod advisory;
pub mod audit;
pub mod config;
pub mod core;
pub mod detectors;
pub mod error;
pub mod mode;
pub mod normalize;
pub mod pipeline;
pub mod risk;
pub mod syntax;
pub mod views;

pub use self::core::{
    AiSection, AnalysisReport, AnalysisRequest, Confidence, EngineDecision, EthicsFlags, Finding,
    InputKind, Location, Severity, Summary, MAX_CONTENT_LENGTH,
};

pub use advisory::{Advisor, AdvisoryError, AdvisoryResult, HttpChatProvider, MockChatProvider};
pub use audit::AuditLog;
pub use config::{AdvisoryConfig, EngineConfig};
pub use detectors::{DetectionWindow, Detector, DetectorRegistry};
pub use error::EngineError;
pub use mode::{decide_mode, AnalysisMode};
pub use normalize::{normalize, Block, ContentKind, NormalizedInput};
pub use pipeline::AnalysisPipeline;
pub use syntax::{detect_language, validate, SyntaxIssue, SyntaxResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
