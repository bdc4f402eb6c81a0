use thiserror::Error;

/// Failures that terminate a request before a completed report exists.
///
/// Syntax errors are not in this enum: an invalid parse is a successful
/// analysis outcome (`HALTED_AT_SYNTAX_STAGE`), not an engine error.
/// Advisory failures live in [`crate::advisory::AdvisoryError`] and are
/// always recovered before they could surface here.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Submission rejected before any engine work ran.
    #[error("input rejected: {0}")]
    InputRejected(String),

    /// Uncaught fault inside normalize/detect/score/derive-views, reported
    /// generically without raw internals.
    #[error("engine failure")]
    EngineFailure,
}

pub type Result<T> = std::result::Result<T, EngineError>;
