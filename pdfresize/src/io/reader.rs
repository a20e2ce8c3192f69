//! PDF reading and loading operations.
//!
//! This module loads input documents fully into memory and records
//! basic load metadata (page count, file size, load time). Encrypted
//! inputs are detected from the parser's error text and surfaced as a
//! dedicated error.
//!
//! # Examples
//!
//! ```no_run
//! use pdfresize::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("drawing.pdf")).await?;
//! println!("Loaded {} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfResizeError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    /// Create a new LoadedPdf from a document.
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }
}

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to verify the page tree after loading.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that skips verification (faster but less safe).
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the PDF file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has an empty page tree (with verification enabled)
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        let start = Instant::now();

        let doc = Document::load(&path_buf).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                PdfResizeError::encrypted_pdf(path_buf.clone())
            } else {
                PdfResizeError::failed_to_load_pdf(path_buf.clone(), err_msg)
            }
        })?;

        if self.verify {
            let pages = doc.get_pages();
            if pages.is_empty() {
                return Err(PdfResizeError::corrupted_pdf(
                    path_buf.clone(),
                    "PDF has no pages",
                ));
            }
        }

        let load_time = start.elapsed();

        Ok(LoadedPdf::new(doc, path_buf, load_time))
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
