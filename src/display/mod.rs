//! Terminal display and formatting utilities.
//!
//! Handles colorized JSON output and decode-report rendering for
//! human-readable terminal output, plus the machine-readable `--json`
//! shapes.

pub mod json_printer;
pub mod report;
