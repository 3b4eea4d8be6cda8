use color_analyzer_rs::image_pipeline::{
    AnalysisConfig, AnalysisPipeline, CaptureConstraints, FacingMode, FileCaptureSource,
};
use color_analyzer_rs::logger;

use tracing::{error, info};

const DEFAULT_INPUT: &str = "capture.jpg";

fn main() -> anyhow::Result<()> {
    logger::init();

    let input = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());

    let config = AnalysisConfig::default();
    let pipeline = AnalysisPipeline::new(config);

    info!("Colour analysis pipeline initialized");
    info!("Input format: {:?}", pipeline.config().input_format);

    let mut source = FileCaptureSource::new(&input).with_facing_mode(FacingMode::Environment);
    if let Some(limit) = pipeline.config().max_input_bytes {
        source = source.with_max_bytes(limit);
    }
    let constraints = CaptureConstraints::facing(FacingMode::Environment);

    match pipeline.analyze_capture_with_timings(&mut source, &constraints) {
        Ok((result, timings)) => {
            timings.log_summary();
            println!("{result}");
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
