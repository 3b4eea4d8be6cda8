//! Image analysis pipeline module
//!
//! Captured stills flow through capture, decoding (with CPU debayering for
//! camera RAW) and brightness-normalized pixel classification.

pub mod analysis;
pub mod capture;
pub mod classify;
pub mod common;
pub mod debayer;
pub mod decode;

pub use common::{
    AnalysisError,
    Result,
};

pub use capture::{
    CaptureConstraints,
    CaptureSource,
    CapturedFrame,
    DataUrlCaptureSource,
    FacingMode,
    FileCaptureSource,
};

pub use decode::{
    AutoDecoder,
    ImageBuffer,
    ImageDecoder,
    RawLoaderDecoder,
    StandardImageDecoder,
};

pub use classify::{
    ClassificationResult,
    PixelClassifier,
    PixelTally,
    classify,
};

pub use analysis::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    AnalysisPipeline,
    InputFormat,
    PipelineTimings,
};
