//! Subcommand implementations; each returns its result instead of printing.

/// `analyze`: token documents to report.
pub mod analyze;
/// `generate`: report to override artifact and update plan.
pub mod generate;
/// `verify`: verification gate over persisted artifacts.
pub mod verify;
