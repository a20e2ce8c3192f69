//! Saving documents to disk.
//!
//! Saves run through a blocking task because lopdf serialization is
//! CPU-bound and synchronous. By default a document is compressed,
//! renumbered, and written to a `.tmp` sibling that is renamed into
//! place once fully flushed, so an interrupted run never leaves a
//! half-written PDF under the final name.

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{PdfResizeError, Result};

/// Knobs controlling how a document is written.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary sibling and rename into place.
    pub atomic: bool,

    /// Compress streams before serializing.
    pub compress: bool,

    /// Renumber objects before serializing.
    pub optimize: bool,

    /// Capacity of the output buffer in bytes.
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            optimize: true,
            buffer_size: 8192,
        }
    }
}

/// What a completed save looked like.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Wall-clock time spent writing.
    pub write_time: Duration,

    /// Size of the file on disk in bytes.
    pub file_size: u64,

    /// Final path of the written file.
    pub output_path: PathBuf,

    /// Whether streams were compressed.
    pub compressed: bool,
}

/// Writes documents according to a fixed set of [`WriteOptions`].
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a writer with the default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with explicit options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer that skips compression.
    pub fn without_compression() -> Self {
        Self {
            options: WriteOptions {
                compress: false,
                ..Default::default()
            },
        }
    }

    /// Save a document, discarding the statistics.
    ///
    /// # Errors
    ///
    /// See [`PdfWriter::save_with_stats`].
    pub async fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        let _stats = self.save_with_stats(doc, path).await?;
        Ok(())
    }

    /// Save a document and report how the write went.
    ///
    /// # Errors
    ///
    /// Returns [`PdfResizeError::FailedToCreateOutput`] when the file
    /// cannot be created (missing directory, permissions) and
    /// [`PdfResizeError::FailedToWrite`] when serialization or the
    /// final rename fails.
    pub async fn save_with_stats(&self, doc: &Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        // save_to needs &mut self; clone into the blocking task
        let mut doc_clone = doc.clone();

        let stats = task::spawn_blocking(move || {
            let start = Instant::now();

            if options.compress {
                doc_clone.compress();
            }

            if options.optimize {
                doc_clone.renumber_objects();
            }

            let write_path = if options.atomic {
                path_buf.with_extension("tmp")
            } else {
                path_buf.clone()
            };

            let file = std::fs::File::create(&write_path).map_err(|e| {
                PdfResizeError::FailedToCreateOutput {
                    path: write_path.clone(),
                    source: e,
                }
            })?;

            let mut writer = std::io::BufWriter::with_capacity(options.buffer_size, file);

            doc_clone
                .save_to(&mut writer)
                .map_err(|e| PdfResizeError::FailedToWrite {
                    path: write_path.clone(),
                    source: std::io::Error::other(e),
                })?;

            writer.flush().map_err(|e| PdfResizeError::FailedToWrite {
                path: write_path.clone(),
                source: e,
            })?;

            if options.atomic {
                std::fs::rename(&write_path, &path_buf).map_err(|e| {
                    PdfResizeError::FailedToWrite {
                        path: path_buf.clone(),
                        source: e,
                    }
                })?;
            }

            let write_time = start.elapsed();
            let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

            Ok::<_, PdfResizeError>(WriteStatistics {
                write_time,
                file_size,
                output_path: path_buf,
                compressed: options.compress,
            })
        })
        .await
        .map_err(|e| PdfResizeError::other(format!("Write task failed: {e}")))??;

        Ok(stats)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
