//! Converter from plain-text tile maps to the fixed-layout binary level format
//!
//! A map is one row per line, one tile per character. The binary level is a
//! 12-byte header (row count, width of row 0, feature-tile count; each a
//! little-endian `u32`) followed by every row's uppercased ASCII bytes with
//! no separators.

#![forbid(unsafe_code)]

/// Header layout, grid encoding and file conversion
pub mod encode;
/// Command-line surface, configuration, errors and logging
pub mod io;
/// Grid model and feature symbol sets
pub mod map;

pub use encode::{EncodedLevel, Encoder, EncoderConfig, LevelHeader, convert};
pub use io::error::{ErrorKind, LevelError, Result};
pub use map::{FeatureSet, Grid};
