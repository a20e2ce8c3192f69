//! Utility functions shared across the crate.

use std::path::{Path, PathBuf};

use crate::error::{PdfResizeError, Result};

/// Collect the PDF files directly inside a directory, sorted by name.
///
/// Only the top level is scanned; subdirectories are not descended
/// into. Matching is by `.pdf` extension.
///
/// # Errors
///
/// Returns an error if the directory path produces an invalid glob
/// pattern.
pub fn collect_pdfs_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.pdf", dir.display());

    let entries = glob::glob(&pattern)
        .map_err(|e| PdfResizeError::other(format!("Invalid glob pattern '{pattern}': {e}")))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    Ok(files)
}

/// Format a duration for human-readable display.
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        format!("{:.0}ms", secs * 1000.0)
    }
}

/// Format a byte count for human-readable display.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
