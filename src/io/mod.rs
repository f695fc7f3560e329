//! Input/output operations and error handling

/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display
pub mod progress;
/// Console parameter entry
pub mod prompt;
/// Console transcript and results file
pub mod report;
