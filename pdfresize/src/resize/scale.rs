//! Scale transform resolution.
//!
//! Given a page's current dimensions, a target paper size, and an
//! orientation policy, compute the scale factors, the final bounding
//! box, and any rotation to apply. This is pure geometry: no document
//! is touched here, which keeps every policy decision unit-testable.

use crate::config::OrientationPolicy;
use crate::error::{PdfResizeError, Result};
use crate::paper::PaperSize;

/// A fully resolved page transform.
///
/// Produced by [`resolve`] and applied to the document by the
/// processor. `box_width`/`box_height` are the dimensions the page's
/// MediaBox is rewritten to after scaling; uniform scaling alone moves
/// content but never changes the box boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTransform {
    /// Horizontal scale factor.
    pub scale_x: f32,

    /// Vertical scale factor.
    pub scale_y: f32,

    /// Final bounding-box width in points.
    pub box_width: f32,

    /// Final bounding-box height in points.
    pub box_height: f32,

    /// Additional clockwise rotation in degrees, if the policy demands one.
    pub rotate: Option<i64>,
}

impl ResolvedTransform {
    /// Check whether both axes share one scale factor.
    pub fn is_isotropic(&self) -> bool {
        (self.scale_x - self.scale_y).abs() < f32::EPSILON
    }
}

/// Resolve the transform for one page.
///
/// # Arguments
///
/// * `page_number` - 1-indexed page number, used only for error context
/// * `page_width` / `page_height` - current bounding-box dimensions in points
/// * `target` - target paper size (portrait by convention)
/// * `policy` - orientation policy for this run
///
/// # Errors
///
/// Returns [`PdfResizeError::MalformedPage`] when the page has zero or
/// negative dimensions; scaling such a page would divide by zero.
pub fn resolve(
    page_number: u32,
    page_width: f32,
    page_height: f32,
    target: PaperSize,
    policy: OrientationPolicy,
) -> Result<ResolvedTransform> {
    if page_width <= 0.0 || page_height <= 0.0 {
        return Err(PdfResizeError::malformed_page(
            page_number,
            format!("zero or negative page dimensions ({page_width} x {page_height} pt)"),
        ));
    }

    let transform = match policy {
        OrientationPolicy::Preserve => ResolvedTransform {
            scale_x: target.width / page_width,
            scale_y: target.height / page_height,
            box_width: target.width,
            box_height: target.height,
            rotate: None,
        },
        OrientationPolicy::Rotate => {
            let page_is_portrait = page_height >= page_width;
            if page_is_portrait {
                // Rotate 270 so content flows into the target
                // orientation; the unrotated box maps onto the swapped
                // target, the displayed result is the literal target.
                let swapped = target.swapped();
                ResolvedTransform {
                    scale_x: swapped.width / page_width,
                    scale_y: swapped.height / page_height,
                    box_width: swapped.width,
                    box_height: swapped.height,
                    rotate: Some(270),
                }
            } else {
                ResolvedTransform {
                    scale_x: target.width / page_width,
                    scale_y: target.height / page_height,
                    box_width: target.width,
                    box_height: target.height,
                    rotate: None,
                }
            }
        }
        OrientationPolicy::Auto => {
            let oriented = target.oriented(page_width > page_height);
            let scale = (oriented.width / page_width).min(oriented.height / page_height);
            ResolvedTransform {
                scale_x: scale,
                scale_y: scale,
                box_width: oriented.width,
                box_height: oriented.height,
                rotate: None,
            }
        }
    };

    Ok(transform)
}
