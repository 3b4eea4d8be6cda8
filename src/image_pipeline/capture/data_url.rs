//! Screenshot payloads in `data:image/<fmt>;base64,<payload>` form.
//!
//! Browser camera widgets hand stills over as data URLs; bare base64 is
//! accepted as well.

use base64::{Engine as _, engine::general_purpose};

use crate::image_pipeline::common::error::{AnalysisError, Result};

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Upper bound on the decoded size of a base64 payload.
fn estimated_decoded_len(payload: &str) -> u64 {
    (payload.len() as u64).div_ceil(4) * 3
}

/// Decodes a data URL (or bare base64) into raw image bytes, refusing
/// payloads whose decoded size could exceed `limit`.
pub fn parse_data_url(input: &str, limit: Option<u64>) -> Result<Vec<u8>> {
    let normalized = input.trim();

    let payload = if let Some(rest) = normalized.strip_prefix(DATA_URL_PREFIX) {
        let marker = rest.find(BASE64_MARKER).ok_or_else(|| {
            AnalysisError::UnsupportedFormat("data URL is not base64 encoded".to_string())
        })?;
        let media_type = &rest[..marker];
        if !media_type.starts_with("image/") {
            return Err(AnalysisError::UnsupportedFormat(format!(
                "data URL media type {:?}",
                media_type
            )));
        }
        &rest[marker + BASE64_MARKER.len()..]
    } else {
        normalized
    };

    if let Some(limit) = limit {
        let size = estimated_decoded_len(payload);
        if size > limit {
            return Err(AnalysisError::InputTooLarge { size, limit });
        }
    }

    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| AnalysisError::DecodeError(format!("invalid base64 payload: {}", e)))
}
