//! pdfresize - Resize PDF pages to a standard paper size.
//!
//! This library loads a PDF, scales every page to a named target paper
//! size (A0..A4, Letter, Legal), and writes one standalone PDF per page
//! plus a merged multi-page PDF into an output directory. It supports:
//!
//! - Isotropic and anisotropic page scaling
//! - Configurable orientation handling
//! - Sequential batch processing over a directory
//! - Comprehensive error handling
//!
//! # Examples
//!
//! ## Resize a single file
//!
//! ```no_run
//! use pdfresize::resize;
//! use pdfresize::config::{Config, OrientationPolicy};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: PathBuf::from("drawing.pdf"),
//!     size_name: "A1".to_string(),
//!     order_number: 1244,
//!     file_number: 1,
//!     output_dir: PathBuf::from("processed"),
//!     policy: OrientationPolicy::Auto,
//!     quiet: false,
//!     verbose: false,
//! };
//!
//! let outcome = resize::process_pdf(&config).await?;
//! println!("Merged PDF: {}", outcome.merged_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfresize::io::{PdfReader, PdfWriter};
//! use pdfresize::validation::Validator;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Validate input
//! let validator = Validator::new();
//! let result = validator.validate_file(&PathBuf::from("input.pdf")).await?;
//! println!("PDF has {} pages", result.page_count);
//!
//! // Load PDF
//! let reader = PdfReader::new();
//! let loaded = reader.load(&PathBuf::from("input.pdf")).await?;
//!
//! // Save PDF
//! let writer = PdfWriter::new();
//! writer.save(&loaded.document, &PathBuf::from("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod paper;
pub mod resize;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{PdfResizeError, Result};
pub use paper::PaperSize;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
