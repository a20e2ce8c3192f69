//! Sequential batch processing over a directory of PDFs.
//!
//! Files are processed in sorted order, each with its own fresh
//! [`Processor`] (and therefore its own token). Order and file numbers
//! advance only when a file succeeds, so a failed file leaves no gap
//! in the merged output numbering.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{PdfResizeError, Result};
use crate::resize::processor::{ProcessOutcome, Processor};
use crate::utils;

/// A file that failed during batch processing.
#[derive(Debug)]
pub struct FileFailure {
    /// Path of the failed input.
    pub path: PathBuf,

    /// The error that stopped it.
    pub error: PdfResizeError,
}

/// Result of a batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Outcomes of the files that were processed successfully.
    pub completed: Vec<ProcessOutcome>,

    /// Files that failed, in encounter order.
    pub failed: Vec<FileFailure>,
}

impl BatchOutcome {
    /// Check whether every file in the batch succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Sequential batch processor.
///
/// Every per-file error is isolated: whether a file is corrupt or its
/// outputs cannot be written, the failure is recorded and the batch
/// moves on to the remaining files. Only problems with the batch
/// itself (missing directory, no PDFs inside) fail the whole run.
pub struct BatchProcessor;

impl BatchProcessor {
    /// Create a new batch processor.
    pub fn new() -> Self {
        Self
    }

    /// Process every PDF in the directory named by `config.input`.
    ///
    /// `config.order_number` and `config.file_number` seed the
    /// numbering of the first merged output; both advance by one per
    /// successful file.
    ///
    /// # Errors
    ///
    /// Returns [`PdfResizeError::InputNotFound`] when the directory
    /// does not exist and [`PdfResizeError::NoFilesToProcess`] when it
    /// contains no PDFs. Per-file errors never fail the batch; they
    /// are returned in [`BatchOutcome::failed`].
    pub async fn process_dir(&self, config: &Config) -> Result<BatchOutcome> {
        if !config.input.exists() {
            return Err(PdfResizeError::input_not_found(config.input.clone()));
        }
        if !config.input.is_dir() {
            return Err(PdfResizeError::invalid_config(format!(
                "Not a directory: {}",
                config.input.display()
            )));
        }

        let files = utils::collect_pdfs_in_dir(&config.input)?;
        if files.is_empty() {
            return Err(PdfResizeError::NoFilesToProcess);
        }

        let mut completed = Vec::new();
        let mut failed = Vec::new();
        let mut order = config.order_number;
        let mut file_number = config.file_number;

        for path in files {
            let file_config = Config {
                input: path.clone(),
                order_number: order,
                file_number,
                ..config.clone()
            };

            let processor = Processor::new();
            match processor.process(&file_config).await {
                Ok(outcome) => {
                    completed.push(outcome);
                    order += 1;
                    file_number += 1;
                }
                Err(error) => failed.push(FileFailure { path, error }),
            }
        }

        Ok(BatchOutcome { completed, failed })
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}
