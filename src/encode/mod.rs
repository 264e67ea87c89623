//! Binary level encoding
//!
//! This module contains:
//! - The fixed 12-byte header
//! - Grid encoding and the file conversion pipeline

/// Grid encoding, file conversion and output strategies
pub mod encoder;
/// Level header layout
pub mod header;

pub use encoder::{EncodedLevel, Encoder, EncoderConfig, ShapeMode, WriteMode, convert};
pub use header::LevelHeader;
