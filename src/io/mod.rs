/// Command-line surface and conversion job
pub mod cli;
/// Format constants and defaults
pub mod configuration;
/// Error types and classification
pub mod error;
/// Diagnostic output setup
pub mod logging;
