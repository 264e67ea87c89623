//! Text map to binary level encoding and file conversion

use crate::encode::header::LevelHeader;
use crate::io::configuration::{HEADER_LEN, TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use crate::io::error::{LevelError, Result, write_error};
use crate::map::features::FeatureSet;
use crate::map::grid::Grid;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// How rows whose width differs from row 0 are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeMode {
    /// Pass ragged rows through unchanged, logging a warning
    #[default]
    Trusting,
    /// Reject ragged rows with a shape error
    Strict,
}

/// How the output file is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a temporary file beside the destination and rename it into place
    #[default]
    Atomic,
    /// Create or truncate the destination and write to it directly
    Direct,
}

/// Settings for an [`Encoder`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Symbols counted in the header's tile count
    pub features: FeatureSet,
    /// Treatment of ragged rows
    pub shape: ShapeMode,
    /// Output strategy used by [`Encoder::convert`]
    pub write: WriteMode,
}

/// Binary level ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLevel {
    /// Header fields
    pub header: LevelHeader,
    /// Uppercased row bytes, concatenated without separators
    pub body: Vec<u8>,
    /// Feature tiles per uppercase symbol; sums to `header.tile_count`
    pub feature_counts: BTreeMap<char, usize>,
}

impl EncodedLevel {
    /// Size of the encoded file in bytes
    pub const fn file_len(&self) -> usize {
        HEADER_LEN + self.body.len()
    }

    /// Header followed by body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.file_len());
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.extend_from_slice(&self.body);
        bytes
    }

    /// Write header followed by body
    ///
    /// # Errors
    ///
    /// Propagates any error from `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.header.write_to(writer)?;
        writer.write_all(&self.body)
    }

    /// Per-symbol counts formatted as `G:4 S:2`
    pub fn breakdown(&self) -> String {
        self.feature_counts
            .iter()
            .map(|(symbol, count)| format!("{symbol}:{count}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Converts text maps into binary levels
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with the given settings
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a parsed grid
    ///
    /// # Errors
    ///
    /// Returns an error if strict shape checking rejects a row or a header
    /// field does not fit in 32 bits
    pub fn encode(&self, grid: &Grid) -> Result<EncodedLevel> {
        match self.config.shape {
            ShapeMode::Strict => grid.validate_shape()?,
            ShapeMode::Trusting => {
                if let Some((row, found)) = grid.first_ragged_row() {
                    warn!(
                        row,
                        found,
                        expected = grid.width(),
                        "Row width differs from row 0; passing rows through unchanged"
                    );
                }
            }
        }

        let mut feature_counts = BTreeMap::new();
        let mut body = Vec::with_capacity(grid.body_len());
        for row in grid.rows() {
            self.config.features.tally_into(row, &mut feature_counts);
            body.extend(row.bytes().map(|byte| byte.to_ascii_uppercase()));
        }

        let tile_count = feature_counts.values().sum();
        let header = LevelHeader::new(grid.row_count(), grid.width(), tile_count)?;

        Ok(EncodedLevel {
            header,
            body,
            feature_counts,
        })
    }

    /// Parse and encode map text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty or not ASCII, or encoding fails
    pub fn encode_text(&self, text: &str) -> Result<EncodedLevel> {
        self.encode(&Grid::parse(text)?)
    }

    /// Read a text map from `input` and write the binary level to `output`
    ///
    /// The output is created or replaced; the input is never modified.
    ///
    /// # Errors
    ///
    /// Returns an input error if the map cannot be read or is empty, an
    /// encoding error for non-ASCII content, a shape error for ragged rows in
    /// strict mode and an output error if the level cannot be written
    pub fn convert(&self, input: &Path, output: &Path) -> Result<EncodedLevel> {
        let grid = read_grid(input)?;
        let level = self.encode(&grid)?;

        match self.config.write {
            WriteMode::Atomic => write_atomic(output, &level)?,
            WriteMode::Direct => write_direct(output, &level)?,
        }

        info!(
            rows = level.header.row_count,
            width = level.header.width,
            tiles = level.header.tile_count,
            bytes = level.file_len(),
            features = %level.breakdown(),
            "Wrote {}",
            output.display()
        );

        Ok(level)
    }
}

/// Convert `input` to `output` with the default feature set, trusting shape
/// handling and an atomic write
///
/// # Errors
///
/// See [`Encoder::convert`]
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<LevelHeader> {
    Encoder::default()
        .convert(input.as_ref(), output.as_ref())
        .map(|level| level.header)
}

/// Read and parse a text map from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not UTF-8, has no rows or
/// contains non-ASCII characters
pub fn read_grid(path: &Path) -> Result<Grid> {
    let bytes = fs::read(path).map_err(|source| LevelError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = bytes.len(), "Read {}", path.display());

    let text = String::from_utf8(bytes).map_err(|source| LevelError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })?;

    Grid::parse(&text).map_err(|error| match error {
        LevelError::EmptyMap { path: None } => LevelError::EmptyMap {
            path: Some(path.to_path_buf()),
        },
        other => other,
    })
}

fn write_atomic(path: &Path, level: &EncodedLevel) -> Result<()> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_FILE_PREFIX).suffix(TEMP_FILE_SUFFIX);
    // Fresh outputs get the same umask-filtered mode as File::create
    #[cfg(unix)]
    {
        use crate::io::configuration::NEW_FILE_MODE;
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(Permissions::from_mode(NEW_FILE_MODE));
    }

    // Dropping the guard on any early return removes the temporary file
    let mut temp = builder
        .tempfile_in(directory)
        .map_err(|source| write_error(path, "create temporary file", source))?;
    debug!("Staging level in {}", temp.path().display());

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        level
            .write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|source| write_error(path, "write temporary file", source))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|source| write_error(path, "sync temporary file", source))?;

    // Replacing an existing level keeps its permissions
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|source| write_error(path, "copy output permissions", source))?;
    }

    temp.persist(path)
        .map_err(|error| write_error(path, "move temporary file into place", error.error))?;
    Ok(())
}

fn write_direct(path: &Path, level: &EncodedLevel) -> Result<()> {
    let file =
        File::create(path).map_err(|source| write_error(path, "create output file", source))?;
    let mut writer = BufWriter::new(file);
    level
        .write_to(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| write_error(path, "write output file", source))?;
    debug!("Wrote directly to {}", path.display());
    Ok(())
}
