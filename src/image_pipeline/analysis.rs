//! Analysis orchestration module
//!
//! Ties capture, decoding and classification together behind one pipeline.

mod pipeline;
mod timing;
pub mod types;


pub use pipeline::AnalysisPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{AnalysisConfig, AnalysisConfigBuilder, InputFormat};
