//! Input validation for PDF files.
//!
//! The validator checks files before processing: existence, file type,
//! readability, PDF structure, and encryption. Results can be rendered
//! as JSON for tooling.

use lopdf::Document;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{PdfResizeError, Result};
use crate::resize::processor::effective_media_box;

/// Validation outcome for a single file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Path of the validated file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// PDF version string (e.g. "1.7").
    pub version: String,

    /// File size in bytes.
    pub file_size: u64,

    /// Number of objects in the document.
    pub object_count: usize,

    /// Width and height of the first page in points, when resolvable.
    pub page_dimensions: Option<(f32, f32)>,
}

/// A file that failed validation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    /// Path of the failed file.
    pub path: PathBuf,

    /// Rendered error message.
    pub error: String,
}

/// Aggregated validation results for a set of files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Number of files validated successfully.
    pub total_files: usize,

    /// Sum of page counts across all files.
    pub total_pages: usize,

    /// Sum of file sizes in bytes.
    pub total_size: u64,

    /// Per-file results.
    pub results: Vec<ValidationResult>,

    /// Files that failed validation, with the reason.
    pub failures: Vec<ValidationFailure>,
}

impl ValidationSummary {
    /// Render the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PdfResizeError::other(format!("Failed to serialize summary: {e}")))
    }

    /// Format the total size as a human-readable string.
    pub fn format_total_size(&self) -> String {
        crate::utils::format_file_size(self.total_size)
    }
}

/// PDF file validator.
#[derive(Debug, Clone)]
pub struct Validator {
    /// Enforce the `.pdf` extension before opening the file.
    strict: bool,
}

impl Validator {
    /// Create a validator that enforces the `.pdf` extension.
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Create a validator that accepts any extension.
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Validate a single PDF file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, is not a regular
    /// file, lacks a `.pdf` extension (strict mode), is empty, cannot
    /// be parsed, is encrypted, or has no pages.
    pub async fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        if self.strict {
            let is_pdf = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
            if !is_pdf {
                return Err(PdfResizeError::invalid_extension(path.to_path_buf()));
            }
        }

        if !path.exists() {
            return Err(PdfResizeError::input_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(PdfResizeError::not_a_file(path.to_path_buf()));
        }

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| PdfResizeError::FileNotAccessible {
                path: path.to_path_buf(),
                source: e,
            })?;

        if metadata.len() == 0 {
            return Err(PdfResizeError::corrupted_pdf(
                path.to_path_buf(),
                "File is empty",
            ));
        }

        let doc = Document::load(path).map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                PdfResizeError::encrypted_pdf(path.to_path_buf())
            } else {
                PdfResizeError::failed_to_load_pdf(path.to_path_buf(), err_msg)
            }
        })?;

        let pages = doc.get_pages();
        if pages.is_empty() {
            return Err(PdfResizeError::corrupted_pdf(
                path.to_path_buf(),
                "PDF has no pages",
            ));
        }

        let page_dimensions = pages.values().next().and_then(|&page_id| {
            effective_media_box(&doc, page_id)
                .map(|(llx, lly, urx, ury)| (urx - llx, ury - lly))
        });

        Ok(ValidationResult {
            path: path.to_path_buf(),
            page_count: pages.len(),
            version: doc.version.clone(),
            file_size: metadata.len(),
            object_count: doc.objects.len(),
            page_dimensions,
        })
    }

    /// Validate multiple files.
    ///
    /// With `continue_on_error`, failed files are recorded in the
    /// summary's `failures` and the rest are still validated;
    /// otherwise the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the first per-file error unless `continue_on_error` is
    /// set.
    pub async fn validate_files(
        &self,
        paths: &[PathBuf],
        continue_on_error: bool,
    ) -> Result<ValidationSummary> {
        let mut results = Vec::with_capacity(paths.len());
        let mut failures = Vec::new();

        for path in paths {
            match self.validate_file(path).await {
                Ok(result) => results.push(result),
                Err(err) if continue_on_error => failures.push(ValidationFailure {
                    path: path.clone(),
                    error: err.to_string(),
                }),
                Err(err) => return Err(err),
            }
        }

        let total_pages = results.iter().map(|r| r.page_count).sum();
        let total_size = results.iter().map(|r| r.file_size).sum();

        Ok(ValidationSummary {
            total_files: results.len(),
            total_pages,
            total_size,
            results,
            failures,
        })
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
