//! Image decoding module
//!
//! Turns captured bytes into an [`ImageBuffer`] of RGBA pixels, whatever the
//! container: regular encoded stills or camera RAW sensor dumps.

mod decoder;
mod standard_decoder;
mod rawloader_decoder;
mod auto_decoder;
pub mod types;

pub use decoder::ImageDecoder;
pub use standard_decoder::StandardImageDecoder;
pub use rawloader_decoder::RawLoaderDecoder;
pub use auto_decoder::AutoDecoder;
pub use types::ImageBuffer;
