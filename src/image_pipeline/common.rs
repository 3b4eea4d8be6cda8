//! Common utilities module
//!
//! Shared error type used by every stage of the analysis pipeline.

pub mod error;

pub use error::{AnalysisError, Result};
