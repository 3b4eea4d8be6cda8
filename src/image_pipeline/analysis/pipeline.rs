use tracing::{info, instrument, warn};
use std::path::Path;

use crate::image_pipeline::{
    analysis::timing::{PipelineTimings, Timer},
    analysis::types::AnalysisConfig,
    capture::{CaptureConstraints, CaptureSource, parse_data_url},
    classify::{ClassificationResult, PixelClassifier},
    common::error::{AnalysisError, Result},
    decode::{AutoDecoder, ImageDecoder},
};

/// Decode → validate → classify, for one captured still at a time.
pub struct AnalysisPipeline<D: ImageDecoder> {
    decoder: D,
    classifier: PixelClassifier,
    config: AnalysisConfig,
}

impl AnalysisPipeline<AutoDecoder> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            decoder: AutoDecoder::new(),
            classifier: PixelClassifier::new(),
            config,
        }
    }
}

impl<D: ImageDecoder> AnalysisPipeline<D> {
    pub fn with_custom(decoder: D, config: AnalysisConfig) -> Self {
        Self {
            decoder,
            classifier: PixelClassifier::new(),
            config,
        }
    }

    fn check_input_size(&self, size: u64) -> Result<()> {
        match self.config.max_input_bytes {
            Some(limit) if size > limit => {
                warn!("Input of {} bytes exceeds limit of {}", size, limit);
                Err(AnalysisError::InputTooLarge { size, limit })
            }
            _ => Ok(()),
        }
    }

    /// Analyzes one encoded still.
    pub fn analyze(&self, input_data: &[u8]) -> Result<ClassificationResult> {
        self.analyze_with_timings(input_data).map(|(result, _)| result)
    }

    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn analyze_with_timings(
        &self,
        input_data: &[u8],
    ) -> Result<(ClassificationResult, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        info!("Starting colour analysis");

        self.check_input_size(input_data.len() as u64)?;

        let timer = Timer::start("decode");
        let buffer = {
            let _span = tracing::info_span!("decode").entered();
            self.decoder.decode(input_data, &self.config)?
        };
        timings.record(timer);

        let timer = Timer::start("validate_dimensions");
        {
            let _span = tracing::info_span!("validate_dimensions",
                width = buffer.width(),
                height = buffer.height()
            ).entered();
            self.config.check_dimensions(buffer.width(), buffer.height())?;
        }
        timings.record(timer);

        let timer = Timer::start("classify");
        let result = {
            let _span = tracing::info_span!("classify").entered();
            self.classifier.classify(&buffer)
        };
        timings.record(timer);

        info!(
            width = buffer.width(),
            height = buffer.height(),
            blue_share = result.blue_share,
            pink_share = result.pink_share,
            elapsed_ms = timings.total_duration().as_secs_f64() * 1000.0,
            "Analysis complete"
        );
        Ok((result, timings))
    }

    #[instrument(skip(self, input_path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, input_path: P) -> Result<ClassificationResult> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Analyzing file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            let metadata = std::fs::metadata(input_path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?;
            self.check_input_size(metadata.len())?;
            std::fs::read(input_path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.analyze(&input_data)
    }

    /// Reads the file without blocking the runtime, then decodes and
    /// classifies synchronously on the calling task.
    pub async fn analyze_file_async<P: AsRef<Path>>(&self, input_path: P) -> Result<ClassificationResult> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Analyzing file");

        let metadata = tokio::fs::metadata(input_path).await.map_err(|e| {
            AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;
        self.check_input_size(metadata.len())?;

        let input_data = tokio::fs::read(input_path).await.map_err(|e| {
            AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;

        self.analyze(&input_data)
    }

    /// Analyzes a `data:image/...;base64,` screenshot.
    pub fn analyze_data_url(&self, data_url: &str) -> Result<ClassificationResult> {
        let input_data = parse_data_url(data_url, self.config.max_input_bytes)?;
        self.analyze(&input_data)
    }

    /// Takes one still from `source` and analyzes it.
    pub fn analyze_capture<S: CaptureSource + ?Sized>(
        &self,
        source: &mut S,
        constraints: &CaptureConstraints,
    ) -> Result<ClassificationResult> {
        self.analyze_capture_with_timings(source, constraints)
            .map(|(result, _)| result)
    }

    /// Like [`analyze_capture`](Self::analyze_capture), with a `capture`
    /// step ahead of the analysis steps.
    #[instrument(skip(self, source))]
    pub fn analyze_capture_with_timings<S: CaptureSource + ?Sized>(
        &self,
        source: &mut S,
        constraints: &CaptureConstraints,
    ) -> Result<(ClassificationResult, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("capture");
        let frame = {
            let _span = tracing::info_span!("capture").entered();
            source.capture(constraints)?
        };
        timings.record(timer);
        info!(source = %frame.source_hint, facing_mode = ?frame.facing_mode, "Frame captured");

        let (result, analysis_timings) = self.analyze_with_timings(&frame.bytes)?;
        for step in analysis_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        Ok((result, timings))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
