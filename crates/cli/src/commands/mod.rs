//! Command implementations for the Sentra CLI
//!
//! `analyze` runs the full pipeline over a file or stdin, with an optional
//! advisory AI pass; `detectors` lists the registered detector set with
//! base severities and confidence levels.

pub mod analyze;
pub mod detectors;
