//! Pattern-based vulnerability detectors.
//!
//! Each detector is an independent, stateless analyzer implementing the
//! [`Detector`] trait. Detectors never execute or evaluate the analyzed
//! content and never abort a run: an internal detector error is swallowed by
//! the registry and contributes no findings. The registry is a closed,
//! ordered set — detector order is fixed, and within a detector block order
//! is preserved, so the concatenated finding list is deterministic.

pub mod command_injection;
pub mod dangerous_functions;
pub mod hardcoded_secrets;
pub mod path_traversal;
pub mod sql_injection;
pub mod weak_crypto;
pub mod xss;

use crate::core::{Confidence, Finding, Severity};
use crate::normalize::NormalizedInput;
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

pub use command_injection::CommandInjectionDetector;
pub use dangerous_functions::DangerousFunctionsDetector;
pub use hardcoded_secrets::HardcodedSecretsDetector;
pub use path_traversal::PathTraversalDetector;
pub use sql_injection::SqlInjectionDetector;
pub use weak_crypto::WeakCryptoDetector;
pub use xss::XssDetector;

/// How far a detector may look when correlating a tainted source with a
/// sink. `Block` keeps cost strictly local; `Input` scans the whole
/// normalized block set, so a source and sink split across distant lines
/// still correlate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionWindow {
    Block,
    Input,
}

pub trait Detector: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    /// Base severity before any promotion.
    fn severity(&self) -> Severity;

    fn confidence(&self) -> Confidence;

    fn window(&self) -> DetectionWindow {
        DetectionWindow::Block
    }

    fn detect(&self, input: &NormalizedInput) -> Result<Vec<Finding>>;
}

/// Severity/confidence promotion shared by the taint-aware detectors: an
/// explicit untrusted source alongside the sink raises both one step.
/// Each detector opts in with its own source pattern.
pub(crate) fn promote_if_tainted(
    severity: Severity,
    confidence: Confidence,
    tainted: bool,
) -> (Severity, Confidence) {
    if tainted {
        (severity.promote(), confidence.promote())
    } else {
        (severity, confidence)
    }
}

/// Fixed, ordered set of detectors. Registration order is detection order.
pub struct DetectorRegistry {
    detectors: Vec<Arc<dyn Detector>>,
}

impl DetectorRegistry {
    pub fn empty() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// The full built-in detector set in its canonical order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(SqlInjectionDetector::new());
        registry.register(XssDetector::new());
        registry.register(CommandInjectionDetector::new());
        registry.register(PathTraversalDetector::new());
        registry.register(DangerousFunctionsDetector::new());
        registry.register(HardcodedSecretsDetector::new());
        registry.register(WeakCryptoDetector::new());
        registry
    }

    pub fn register<D: Detector + 'static>(&mut self, detector: D) {
        self.detectors.push(Arc::new(detector));
    }

    pub fn all(&self) -> &[Arc<dyn Detector>] {
        &self.detectors
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Run every detector in registration order and concatenate findings.
    /// A failing detector is logged and skipped; it never fails the run.
    pub fn run_all(&self, input: &NormalizedInput) -> Vec<Finding> {
        let mut findings = Vec::new();
        for detector in &self.detectors {
            match detector.detect(input) {
                Ok(detected) => findings.extend(detected),
                Err(e) => warn!(detector = detector.id(), error = %e, "detector failed"),
            }
        }
        findings
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
