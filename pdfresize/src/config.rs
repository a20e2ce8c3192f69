//! Configuration module for pdfresize.
//!
//! This module transforms CLI arguments into a validated, normalized
//! configuration that drives the resize process. It handles:
//! - Validation of argument combinations
//! - Resolution of the orientation policy
//! - Application of defaults

use anyhow::{Result, bail};

use crate::PdfResizeError;
use crate::paper;
use std::{path::PathBuf, str::FromStr};

/// How page orientation is reconciled with the target size.
///
/// A single run applies one policy to every page; policies are never
/// mixed mid-document or mid-batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationPolicy {
    /// Never rotate. Scale each axis independently against the literal
    /// target dimensions. Anisotropic factors can distort content when
    /// a page's orientation disagrees with the target.
    Preserve,

    /// Rotate portrait pages 270 degrees so their content flows into
    /// the target orientation, then scale onto the target.
    Rotate,

    /// Swap the target's width/height to match each page's own
    /// orientation and apply a single isotropic factor (the smaller of
    /// the two axis ratios), preserving aspect ratio without
    /// distortion.
    #[default]
    Auto,
}

impl OrientationPolicy {
    /// Name of this policy as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Rotate => "rotate",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for OrientationPolicy {
    type Err = crate::PdfResizeError;

    /// Parse an orientation policy from string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation: "preserve", "rotate", or "auto"
    ///
    /// # Errors
    ///
    /// Returns an error if the string doesn't match a valid policy.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "rotate" => Ok(Self::Rotate),
            "auto" => Ok(Self::Auto),
            _ => Err(PdfResizeError::InvalidConfig {
                message: format!(
                    "Invalid orientation policy: {s}. Must be one of: preserve, rotate, auto"
                ),
            }),
        }
    }
}

/// Complete configuration for a resize operation.
///
/// This structure contains all settings needed to process one input
/// (file or directory), derived and validated from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF file, or directory of PDFs in batch mode.
    pub input: PathBuf,

    /// Target paper size name (e.g. "A1").
    pub size_name: String,

    /// Order number used in the merged output's file name.
    pub order_number: u32,

    /// File number used in the merged output's file name.
    pub file_number: u32,

    /// Directory output artifacts are written to.
    pub output_dir: PathBuf,

    /// Orientation policy applied to every page.
    pub policy: OrientationPolicy,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Verbose output mode.
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// Checks for logical inconsistencies and invalid combinations.
    /// Resolving the size name here keeps the fail-fast guarantee: an
    /// unknown size is rejected before any I/O happens.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input path is empty
    /// - The size name does not resolve to a known paper size
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            bail!("No input file specified");
        }

        if let Err(err) = paper::resolve(&self.size_name) {
            bail!("{err}");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        Ok(())
    }

    /// Check if output should be displayed.
    pub fn should_print(&self) -> bool {
        !self.quiet
    }
}
