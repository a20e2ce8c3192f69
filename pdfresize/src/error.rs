//! Error types for pdfresize.
//!
//! This module defines all error types that can occur during PDF resize
//! operations. Errors are designed to be informative and actionable,
//! providing clear context about what went wrong and how to fix it.
//!
//! # Error Categories
//!
//! - **I/O Errors**: File not found, permission denied, etc.
//! - **Input Errors**: Bad extension, unknown paper size, invalid configuration
//! - **PDF Errors**: Invalid PDF structure, corrupted files, degenerate pages
//! - **Write Errors**: Problems creating or writing output files

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfresize operations.
pub type Result<T> = std::result::Result<T, PdfResizeError>;

/// Main error type for pdfresize operations.
///
/// All errors in pdfresize use this type, which provides detailed context
/// about what went wrong and where.
#[derive(Debug, Error)]
pub enum PdfResizeError {
    /// Input file was not found.
    #[error("Input not found: {path}", path = .path.display())]
    InputNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Input file is not accessible (permission denied, etc.).
    #[error("Cannot access file: {path}\n  Reason: {source}", path = .path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Input path exists but is not a regular file when one was expected.
    #[error("Not a file: {path}", path = .path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Input file does not carry a `.pdf` extension.
    #[error(
        "Not a PDF file: {path}\n  \
         Hint: input files must have a .pdf extension (case-insensitive)",
        path = .path.display()
    )]
    InvalidExtension {
        /// Path with the offending extension.
        path: PathBuf,
    },

    /// Requested target paper size is not in the size table.
    #[error("Unknown paper size: {name}\n  Supported sizes: {supported}")]
    UnknownPaperSize {
        /// The size name as given by the caller.
        name: String,
        /// Comma-separated list of supported size names.
        supported: String,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF: {path}\n  Reason: {reason}", path = .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is corrupted or has invalid structure.
    #[error("Corrupted or invalid PDF: {path}\n  Details: {details}", path = .path.display())]
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {path}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path = .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// A page has degenerate geometry (zero or negative dimensions).
    #[error("Malformed page {page}: {details}")]
    MalformedPage {
        /// 1-indexed page number.
        page: u32,
        /// Details about the bad geometry.
        details: String,
    },

    /// No PDF files were found for batch processing.
    #[error("No PDF files to process")]
    NoFilesToProcess,

    /// Failed to create output file or directory.
    #[error("Failed to create output: {path}\n  Reason: {source}", path = .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {path}\n  Reason: {source}", path = .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<io::Error> for PdfResizeError {
    fn from(err: io::Error) -> Self {
        Self::Io { source: err }
    }
}

impl From<lopdf::Error> for PdfResizeError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for PdfResizeError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfResizeError {
    /// Create an InputNotFound error.
    pub fn input_not_found(path: PathBuf) -> Self {
        Self::InputNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create an InvalidExtension error.
    pub fn invalid_extension(path: PathBuf) -> Self {
        Self::InvalidExtension { path }
    }

    /// Create an UnknownPaperSize error.
    pub fn unknown_paper_size(name: impl Into<String>) -> Self {
        Self::UnknownPaperSize {
            name: name.into(),
            supported: crate::paper::supported_names().join(", "),
        }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create a MalformedPage error.
    pub fn malformed_page(page: u32, details: impl Into<String>) -> Self {
        Self::MalformedPage {
            page,
            details: details.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (batch processing can continue).
    ///
    /// Returns true for per-file errors that may be skipped in batch mode.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FailedToLoadPdf { .. }
                | Self::CorruptedPdf { .. }
                | Self::EncryptedPdf { .. }
                | Self::MalformedPage { .. }
                | Self::InvalidExtension { .. }
        )
    }

    /// Check if this error should stop all processing immediately.
    ///
    /// Returns true for fatal errors that should always terminate.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NoFilesToProcess
                | Self::FailedToCreateOutput { .. }
                | Self::FailedToWrite { .. }
        )
    }

    /// Get the exit code for this error.
    ///
    /// Returns the appropriate process exit code based on error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::InvalidExtension { .. } => 1,
            Self::UnknownPaperSize { .. } => 1,
            Self::FailedToLoadPdf { .. } => 3,
            Self::CorruptedPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::MalformedPage { .. } => 3,
            Self::NoFilesToProcess => 1,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::InvalidConfig { .. } => 1,
            Self::Io { .. } => 5,
            Self::Other { .. } => 1,
        }
    }
}
