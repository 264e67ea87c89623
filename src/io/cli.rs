//! Command-line interface for converting a text map into a binary level

use crate::encode::encoder::{EncodedLevel, Encoder, EncoderConfig, ShapeMode, WriteMode};
use crate::io::configuration::DEFAULT_FEATURE_SYMBOLS;
use crate::io::error::Result;
use crate::io::logging::Verbosity;
use crate::map::features::FeatureSet;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "levelpack")]
#[command(
    author,
    version,
    about = "Convert a text tile map into a binary level file"
)]
/// Command-line arguments for the converter
// Each flag toggles an independent behaviour
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Text map, one row per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Binary level file to create or replace
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Reject maps whose rows differ in width from the first row
    #[arg(short, long)]
    pub strict: bool,

    /// Symbols counted as feature tiles (case-insensitive)
    #[arg(short, long, value_name = "SYMBOLS", default_value = DEFAULT_FEATURE_SYMBOLS)]
    pub features: String,

    /// Write straight to OUTPUT instead of renaming a temporary file into place
    #[arg(short, long)]
    pub direct: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Report every read and write step
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Logging level selected by `--quiet` and `--verbose`
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Shape handling selected by `--strict`
    pub const fn shape_mode(&self) -> ShapeMode {
        if self.strict {
            ShapeMode::Strict
        } else {
            ShapeMode::Trusting
        }
    }

    /// Output strategy selected by `--direct`
    pub const fn write_mode(&self) -> WriteMode {
        if self.direct {
            WriteMode::Direct
        } else {
            WriteMode::Atomic
        }
    }

    /// Build encoder settings from the parsed flags
    ///
    /// # Errors
    ///
    /// Returns an error if `--features` is not a valid symbol list
    pub fn encoder_config(&self) -> Result<EncoderConfig> {
        Ok(EncoderConfig {
            features: FeatureSet::from_symbols(&self.features)?,
            shape: self.shape_mode(),
            write: self.write_mode(),
        })
    }
}

/// Runs one conversion described by the command line
pub struct ConversionJob {
    cli: Cli,
}

impl ConversionJob {
    /// Create a job from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Convert the input map and write the output level
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any read, encode
    /// or write step fails
    pub fn run(&self) -> Result<EncodedLevel> {
        let start_time = Instant::now();
        let config = self.cli.encoder_config()?;
        debug!(
            features = %config.features,
            shape = ?config.shape,
            write = ?config.write,
            "Converting {} -> {}",
            self.cli.input.display(),
            self.cli.output.display()
        );

        let level = Encoder::new(config).convert(&self.cli.input, &self.cli.output)?;

        debug!(elapsed = ?start_time.elapsed(), "Conversion finished");
        Ok(level)
    }
}
