//! Fixed 12-byte level header

use crate::io::configuration::{HEADER_FIELD_LEN, HEADER_LEN};
use crate::io::error::{LevelError, Result};
use std::io::Write;

/// Level header as the engine reads it: row count, width, feature-tile count
///
/// Each field is written as a little-endian `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LevelHeader {
    /// Number of text rows
    pub row_count: u32,
    /// Character width of row 0
    pub width: u32,
    /// Feature tiles across all rows
    pub tile_count: u32,
}

impl LevelHeader {
    /// Build a header from in-memory sizes
    ///
    /// # Errors
    ///
    /// Returns an error if any value exceeds `u32::MAX`
    pub fn new(row_count: usize, width: usize, tile_count: usize) -> Result<Self> {
        Ok(Self {
            row_count: narrow("row_count", row_count)?,
            width: narrow("width", width)?,
            tile_count: narrow("tile_count", tile_count)?,
        })
    }

    /// Encode the header in wire order
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0_u8; HEADER_LEN];
        let fields = [self.row_count, self.width, self.tile_count];
        for (chunk, field) in bytes.chunks_exact_mut(HEADER_FIELD_LEN).zip(fields) {
            chunk.copy_from_slice(&field.to_le_bytes());
        }
        bytes
    }

    /// Write the encoded header
    ///
    /// # Errors
    ///
    /// Propagates any error from `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Body length the engine expects: `row_count * width`
    pub const fn nominal_body_len(&self) -> u64 {
        self.row_count as u64 * self.width as u64
    }
}

fn narrow(field: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_too_large| LevelError::DimensionOverflow { field, value })
}
