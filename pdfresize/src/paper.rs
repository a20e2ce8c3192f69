//! Paper size table and lookup.
//!
//! Target sizes are expressed in PDF points (1/72 inch), portrait
//! orientation by convention. Lookup is case-insensitive; unknown names
//! are rejected with [`PdfResizeError::UnknownPaperSize`].

use crate::error::{PdfResizeError, Result};

/// A target paper size in points, portrait by convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperSize {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl PaperSize {
    /// Create a paper size from width and height in points.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check whether this size is landscape (width greater than height).
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Return this size with width and height swapped.
    pub fn swapped(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Return this size oriented to match the requested orientation.
    ///
    /// Swaps width/height when the stored orientation disagrees with
    /// `landscape`; otherwise returns the size unchanged.
    pub fn oriented(&self, landscape: bool) -> Self {
        if self.is_landscape() == landscape {
            *self
        } else {
            self.swapped()
        }
    }
}

/// ISO A0, 841 x 1189 mm.
pub const A0: PaperSize = PaperSize::new(2383.94, 3370.39);
/// ISO A1, 594 x 841 mm.
pub const A1: PaperSize = PaperSize::new(1683.78, 2383.94);
/// ISO A2, 420 x 594 mm.
pub const A2: PaperSize = PaperSize::new(1190.55, 1683.78);
/// ISO A3, 297 x 420 mm.
pub const A3: PaperSize = PaperSize::new(841.89, 1190.55);
/// ISO A4, 210 x 297 mm.
pub const A4: PaperSize = PaperSize::new(595.28, 841.89);
/// US Letter, 8.5 x 11 in.
pub const LETTER: PaperSize = PaperSize::new(612.0, 792.0);
/// US Legal, 8.5 x 14 in.
pub const LEGAL: PaperSize = PaperSize::new(612.0, 1008.0);

const PAPER_SIZES: &[(&str, PaperSize)] = &[
    ("A0", A0),
    ("A1", A1),
    ("A2", A2),
    ("A3", A3),
    ("A4", A4),
    ("LETTER", LETTER),
    ("LEGAL", LEGAL),
];

/// Resolve a size name to its dimensions.
///
/// Names are upper-cased before lookup, so "a1", "A1", and "a1" all
/// resolve to the same size.
///
/// # Errors
///
/// Returns [`PdfResizeError::UnknownPaperSize`] when the name is not in
/// the size table.
///
/// # Examples
///
/// ```
/// use pdfresize::paper;
///
/// let size = paper::resolve("a1").unwrap();
/// assert_eq!(size.width, 1683.78);
/// assert!(paper::resolve("B9").is_err());
/// ```
pub fn resolve(name: &str) -> Result<PaperSize> {
    let key = name.trim().to_uppercase();

    PAPER_SIZES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, size)| *size)
        .ok_or_else(|| PdfResizeError::unknown_paper_size(name))
}

/// Names of all supported paper sizes, in table order.
pub fn supported_names() -> Vec<&'static str> {
    PAPER_SIZES.iter().map(|(name, _)| *name).collect()
}
