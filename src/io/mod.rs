//! Input/output: command line, interactive session, reporting and errors

/// Command-line argument parsing and run orchestration
pub mod cli;
/// Constants, limits and preset choices
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Step progress display
pub mod progress;
/// Plain-text result and summary rendering
pub mod report;
/// Interactive menu-driven session
pub mod session;
