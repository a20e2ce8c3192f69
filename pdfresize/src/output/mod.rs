//! Output formatting and display for pdfresize.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Error and warning display
//! - Summary reports
//! - Quiet and verbose modes
//!
//! # Examples
//!
//! ```no_run
//! use pdfresize::output::OutputFormatter;
//! use pdfresize::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Starting resize operation");
//! formatter.success("Resize completed successfully");
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::resize::BatchOutcome;
use crate::validation::ValidationSummary;

/// Display a validation summary to the user.
pub fn display_validation_summary(formatter: &OutputFormatter, summary: &ValidationSummary) {
    if !summary.failures.is_empty() {
        formatter.warning(&format!(
            "Warning: {} file(s) failed validation",
            summary.failures.len()
        ));
    }

    formatter.info(&format!(
        "Validated {} file(s): {} pages, {}",
        summary.total_files,
        summary.total_pages,
        summary.format_total_size()
    ));
}

/// Display the result of a batch run to the user.
pub fn display_batch_summary(formatter: &OutputFormatter, outcome: &BatchOutcome) {
    if !outcome.failed.is_empty() {
        formatter.warning(&format!(
            "Warning: {} file(s) failed",
            outcome.failed.len()
        ));
    }

    let total_pages: usize = outcome
        .completed
        .iter()
        .map(|o| o.statistics.pages_processed)
        .sum();

    formatter.info(&format!(
        "Processed {} file(s): {} pages",
        outcome.completed.len(),
        total_pages
    ));
}
