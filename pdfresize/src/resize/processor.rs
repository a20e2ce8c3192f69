//! Single-file resize processing.
//!
//! The [`Processor`] drives the full pipeline for one input PDF:
//! validate the path, load the document, transform every page onto the
//! target paper size, write one single-page PDF per page, and write the
//! merged multi-page result. Page content is never re-encoded; each
//! page gets a `cm` prologue stream and a balancing `Q` epilogue, and
//! its MediaBox is rewritten to the target dimensions.

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use rand::RngCore;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{PdfResizeError, Result};
use crate::io::{PdfReader, PdfWriter};
use crate::paper;
use crate::resize::scale::{self, ResolvedTransform};

/// Statistics about a completed resize operation.
#[derive(Debug, Clone)]
pub struct ProcessStatistics {
    /// Number of pages that were transformed.
    pub pages_processed: usize,

    /// Wall-clock time for the whole operation.
    pub process_time: Duration,

    /// Size of the input file in bytes.
    pub input_size: u64,

    /// Size of the merged output file in bytes.
    pub output_size: u64,
}

/// Result of processing one input PDF.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Path of the merged multi-page output.
    pub merged_path: PathBuf,

    /// Paths of the per-page outputs, in page order.
    pub page_paths: Vec<PathBuf>,

    /// Statistics about the operation.
    pub statistics: ProcessStatistics,
}

/// Generate a random 16-character lowercase hex token.
///
/// Each [`Processor`] carries one token for its lifetime, so every
/// per-page file written by the same processor shares it.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Processor for a single input PDF.
///
/// Holds the invocation token used in per-page file names. Create a
/// fresh processor per input file so tokens never collide across a
/// batch.
pub struct Processor {
    token: String,
}

impl Processor {
    /// Create a processor with a freshly generated token.
    pub fn new() -> Self {
        Self {
            token: generate_token(),
        }
    }

    /// The invocation token used in per-page file names.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Process one input PDF according to the configuration.
    ///
    /// Writes one single-page PDF per input page plus a merged
    /// multi-page PDF into `config.output_dir`, creating the directory
    /// if it does not exist.
    ///
    /// # Errors
    ///
    /// Fails before any output is written when the paper size is
    /// unknown, the input path is invalid, or the PDF cannot be
    /// loaded. Fails mid-run with a write error if the output
    /// directory or a file cannot be created.
    pub async fn process(&self, config: &Config) -> Result<ProcessOutcome> {
        let start = Instant::now();

        // Resolve the target first so an unknown size never touches I/O
        let target = paper::resolve(&config.size_name)?;
        let size_label = config.size_name.trim().to_uppercase();

        validate_input_path(&config.input)?;

        let reader = PdfReader::new();
        let loaded = reader.load(&config.input).await?;
        let mut doc = loaded.document;

        tokio::fs::create_dir_all(&config.output_dir)
            .await
            .map_err(|e| PdfResizeError::FailedToCreateOutput {
                path: config.output_dir.clone(),
                source: e,
            })?;

        let writer = PdfWriter::new();
        let pages: Vec<(u32, ObjectId)> = doc.get_pages().into_iter().collect();
        let mut page_paths = Vec::with_capacity(pages.len());

        for (index, (page_number, page_id)) in pages.iter().enumerate() {
            let (llx, lly, urx, ury) = effective_media_box(&doc, *page_id).ok_or_else(|| {
                PdfResizeError::malformed_page(*page_number, "page has no MediaBox")
            })?;

            let width = urx - llx;
            let height = ury - lly;
            let transform =
                scale::resolve(*page_number, width, height, target, config.policy)?;

            apply_transform(&mut doc, *page_id, (llx, lly), &transform)?;

            let single = extract_page(&doc, *page_id)?;
            let page_path = config.output_dir.join(format!(
                "output_{}_{}_{}.pdf",
                self.token, size_label, index
            ));
            writer.save(&single, &page_path).await?;
            page_paths.push(page_path);
        }

        let merged_path = config.output_dir.join(format!(
            "Order{}_File{}.pdf",
            config.order_number, config.file_number
        ));
        let merged_stats = writer.save_with_stats(&doc, &merged_path).await?;

        Ok(ProcessOutcome {
            merged_path,
            page_paths,
            statistics: ProcessStatistics {
                pages_processed: pages.len(),
                process_time: start.elapsed(),
                input_size: loaded.file_size,
                output_size: merged_stats.file_size,
            },
        })
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the input path before any PDF parsing happens.
fn validate_input_path(path: &Path) -> Result<()> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(PdfResizeError::invalid_extension(path.to_path_buf()));
    }

    if !path.exists() {
        return Err(PdfResizeError::input_not_found(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(PdfResizeError::not_a_file(path.to_path_buf()));
    }

    Ok(())
}

/// Find a page's MediaBox, walking the Parent chain for inherited boxes.
///
/// Returns `(llx, lly, urx, ury)` in points. Stops on a repeated id,
/// so a cyclic Parent chain resolves to `None` instead of looping.
pub(crate) fn effective_media_box(doc: &Document, page_id: ObjectId) -> Option<(f32, f32, f32, f32)> {
    let mut current = page_id;
    let mut visited = HashSet::new();
    loop {
        if !visited.insert(current) {
            return None;
        }
        let dict = doc.get_object(current).ok()?.as_dict().ok()?;

        if let Ok(obj) = dict.get(b"MediaBox") {
            let arr = match obj {
                Object::Reference(id) => doc.get_object(*id).ok()?.as_array().ok()?,
                other => other.as_array().ok()?,
            };
            if arr.len() != 4 {
                return None;
            }
            let llx = arr[0].as_float().ok()?;
            let lly = arr[1].as_float().ok()?;
            let urx = arr[2].as_float().ok()?;
            let ury = arr[3].as_float().ok()?;
            return Some((llx, lly, urx, ury));
        }

        match dict.get(b"Parent") {
            Ok(Object::Reference(id)) => current = *id,
            _ => return None,
        }
    }
}

/// Apply a resolved transform to one page in place.
///
/// Wraps the existing content in `q .. cm` / `Q` streams, rewrites the
/// MediaBox (and CropBox, when present) to the transform's bounding
/// box with the origin at zero, and adds any rotation on top of the
/// page's existing /Rotate value.
fn apply_transform(
    doc: &mut Document,
    page_id: ObjectId,
    origin: (f32, f32),
    transform: &ResolvedTransform,
) -> Result<()> {
    let (llx, lly) = origin;
    let sx = transform.scale_x;
    let sy = transform.scale_y;

    // Translate a non-zero origin back to (0, 0) while scaling
    let tx = -sx * llx;
    let ty = -sy * lly;

    let existing_contents = {
        let dict = doc
            .get_object(page_id)
            .and_then(Object::as_dict)
            .map_err(|e| PdfResizeError::other(e.to_string()))?;
        dict.get(b"Contents").ok().cloned()
    };

    let existing_rotate = doc
        .get_object(page_id)
        .ok()
        .and_then(|obj| obj.as_dict().ok())
        .and_then(|dict| dict.get(b"Rotate").ok())
        .and_then(|obj| obj.as_i64().ok())
        .unwrap_or(0);

    let prologue = format!("q\n{sx:.6} 0 0 {sy:.6} {tx:.6} {ty:.6} cm\n");
    let prologue_id = doc.add_object(Object::Stream(Stream::new(
        Dictionary::new(),
        prologue.into_bytes(),
    )));
    let epilogue_id = doc.add_object(Object::Stream(Stream::new(
        Dictionary::new(),
        b"\nQ\n".to_vec(),
    )));

    let mut contents: Vec<Object> = vec![Object::Reference(prologue_id)];
    match existing_contents {
        Some(Object::Reference(id)) => contents.push(Object::Reference(id)),
        Some(Object::Array(items)) => contents.extend(items),
        Some(Object::Stream(stream)) => {
            let id = doc.add_object(Object::Stream(stream));
            contents.push(Object::Reference(id));
        }
        _ => {}
    }
    contents.push(Object::Reference(epilogue_id));

    let new_box = vec![
        Object::Real(0.0),
        Object::Real(0.0),
        Object::Real(transform.box_width),
        Object::Real(transform.box_height),
    ];

    let dict = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| PdfResizeError::other(e.to_string()))?;

    dict.set("Contents", Object::Array(contents));
    dict.set("MediaBox", new_box.clone());
    if dict.has(b"CropBox") {
        dict.set("CropBox", new_box);
    }
    if let Some(degrees) = transform.rotate {
        dict.set("Rotate", (existing_rotate + degrees) % 360);
    }

    Ok(())
}

/// Build a single-page document containing only the given page.
///
/// The clone keeps the source's resources reachable; pruning drops
/// everything the remaining page does not reference.
fn extract_page(doc: &Document, page_id: ObjectId) -> Result<Document> {
    let mut single = doc.clone();

    let pages_id = single
        .catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| PdfResizeError::other(e.to_string()))?;

    let pages_dict = single
        .get_object_mut(pages_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| PdfResizeError::other(e.to_string()))?;
    pages_dict.set("Kids", vec![Object::Reference(page_id)]);
    pages_dict.set("Count", 1);

    let page_dict = single
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| PdfResizeError::other(e.to_string()))?;
    page_dict.set("Parent", Object::Reference(pages_id));

    let _ = single.prune_objects();
    single.renumber_objects();

    Ok(single)
}
