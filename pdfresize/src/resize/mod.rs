//! Page resizing: transform resolution, single-file processing, and
//! sequential batch processing.
//!
//! # Examples
//!
//! ```no_run
//! use pdfresize::resize;
//! use pdfresize::config::Config;
//!
//! # async fn example(config: Config) -> Result<(), Box<dyn std::error::Error>> {
//! let outcome = resize::process_pdf(&config).await?;
//! println!(
//!     "{} page(s) -> {}",
//!     outcome.page_paths.len(),
//!     outcome.merged_path.display()
//! );
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod processor;
pub mod scale;

pub use batch::{BatchOutcome, BatchProcessor, FileFailure};
pub use processor::{ProcessOutcome, ProcessStatistics, Processor, generate_token};
pub use scale::ResolvedTransform;

use crate::Result;
use crate::config::Config;

/// Process a single PDF with a freshly generated token.
///
/// Convenience wrapper around [`Processor::process`].
pub async fn process_pdf(config: &Config) -> Result<ProcessOutcome> {
    Processor::new().process(config).await
}
