//! Error types and classification for level conversion

use std::fmt;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum LevelError {
    /// Input map could not be read from the filesystem
    ReadInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input map contains no rows
    EmptyMap {
        /// Path to the input file, when the map came from disk
        path: Option<PathBuf>,
    },

    /// Input bytes are not valid UTF-8
    InvalidUtf8 {
        /// Path to the input file
        path: PathBuf,
        /// Underlying decoding error
        source: FromUtf8Error,
    },

    /// A row contains a character that cannot be written as a single byte
    NonAscii {
        /// Zero-based row index
        row: usize,
        /// Zero-based character index within the row
        column: usize,
        /// The offending character
        character: char,
    },

    /// A row's width differs from row 0 while strict shape checking is on
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Width declared by row 0
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// A header field does not fit in 32 bits
    DimensionOverflow {
        /// Header field name
        field: &'static str,
        /// Value that overflowed
        value: usize,
    },

    /// Output file could not be created, written or moved into place
    WriteOutput {
        /// Path where the write was attempted
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration value validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

/// Broad classification of a [`LevelError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing, unreadable or empty input
    Input,
    /// Output could not be produced
    Output,
    /// Input cannot be represented in the single-byte body or header
    Encoding,
    /// Rows disagree on width under strict checking
    Shape,
    /// Invalid user-supplied configuration
    Configuration,
}

impl LevelError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ReadInput { .. } | Self::EmptyMap { .. } => ErrorKind::Input,
            Self::InvalidUtf8 { .. } | Self::NonAscii { .. } | Self::DimensionOverflow { .. } => {
                ErrorKind::Encoding
            }
            Self::RaggedRow { .. } => ErrorKind::Shape,
            Self::WriteOutput { .. } => ErrorKind::Output,
            Self::InvalidParameter { .. } => ErrorKind::Configuration,
        }
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadInput { path, source } => {
                write!(f, "Failed to read map '{}': {source}", path.display())
            }
            Self::EmptyMap { path: Some(path) } => {
                write!(f, "Map '{}' contains no rows", path.display())
            }
            Self::EmptyMap { path: None } => write!(f, "Map contains no rows"),
            Self::InvalidUtf8 { path, source } => {
                write!(f, "Map '{}' is not valid UTF-8: {source}", path.display())
            }
            Self::NonAscii {
                row,
                column,
                character,
            } => {
                write!(
                    f,
                    "Non-ASCII character {character:?} (U+{:04X}) at row {row}, column {column}",
                    u32::from(*character)
                )
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has width {found} but row 0 declares width {expected}"
                )
            }
            Self::DimensionOverflow { field, value } => {
                write!(f, "Header field '{field}' = {value} does not fit in 32 bits")
            }
            Self::WriteOutput {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Failed to {operation} for '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadInput { source, .. } | Self::WriteOutput { source, .. } => Some(source),
            Self::InvalidUtf8 { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, LevelError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LevelError {
    LevelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an output error for the given path and operation
pub fn write_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> LevelError {
    LevelError::WriteOutput {
        path: path.into(),
        operation,
        source,
    }
}
