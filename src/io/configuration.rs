//! Format constants and runtime configuration defaults

// Binary layout
/// Size of the fixed level header in bytes (three little-endian `u32` fields)
pub const HEADER_LEN: usize = 12;
/// Size of a single header field in bytes
pub const HEADER_FIELD_LEN: usize = 4;

// Feature symbols understood by the engine: green brick, red brick,
// mossy brick, web, spider and coin
/// Feature symbols counted when no custom set is given
pub const DEFAULT_FEATURE_SYMBOLS: &str = "GRMWSC";

/// Number of code points a feature set can address (7-bit ASCII)
pub const ASCII_RANGE: usize = 128;

// Logging
/// Target used for the default log filter directive
pub const LOG_TARGET: &str = "levelpack";
/// Environment variable that overrides the verbosity flags
pub const LOG_ENV_VAR: &str = "RUST_LOG";

// Output settings
/// Prefix for temporary files created next to the destination during atomic writes
pub const TEMP_FILE_PREFIX: &str = ".levelpack-";
/// Suffix for temporary files created during atomic writes
pub const TEMP_FILE_SUFFIX: &str = ".tmp";
/// Mode requested for newly created outputs before the process umask applies
pub const NEW_FILE_MODE: u32 = 0o666;
