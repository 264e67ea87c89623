//! Diagnostic output through `tracing`, written to standard error

use crate::io::configuration::{LOG_ENV_VAR, LOG_TARGET};
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static LOGGING_INIT: Once = Once::new();

/// How much the converter reports while it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Conversion summary and warnings
    #[default]
    Normal,
    /// Every read and write step
    Verbose,
}

impl Verbosity {
    /// Select a verbosity from the CLI flags; quiet wins over verbose
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn directive(self) -> String {
        let level = match self {
            Self::Quiet => "error",
            Self::Normal => "info",
            Self::Verbose => "debug",
        };
        format!("{LOG_TARGET}={level}")
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `verbosity`. Only the first call has any
/// effect, so tests and embedding applications can call this freely.
pub fn init_logging(verbosity: Verbosity) {
    LOGGING_INIT.call_once(|| {
        let filter = if std::env::var_os(LOG_ENV_VAR).is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(verbosity.directive())
        };

        // Another subscriber may already be installed by an embedding application
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
