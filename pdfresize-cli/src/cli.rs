//! CLI argument parsing for pdfresize.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use pdfresize::config::{Config, OrientationPolicy};
use pdfresize::error::{PdfResizeError, Result};

/// Resize PDF pages to a standard paper size.
///
/// pdfresize scales every page of a PDF onto a named paper size,
/// writing one single-page PDF per input page plus a merged multi-page
/// PDF. Given a directory, every PDF inside is processed in turn.
#[derive(Parser, Debug)]
#[command(name = "pdfresize")]
#[command(version)]
#[command(about = "Resize PDF pages to a standard paper size", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input PDF file, or a directory of PDFs for batch mode
    ///
    /// Examples:
    ///   pdfresize drawing.pdf -s A1
    ///   pdfresize ./drawings/ -s A3 -o 1244
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Target paper size
    ///
    /// One of: A0, A1, A2, A3, A4, Letter, Legal (case-insensitive).
    #[arg(short, long, value_name = "SIZE", default_value = "A1")]
    pub size: String,

    /// Order number used in the merged output's file name
    ///
    /// The merged PDF is named Order<N>_File<M>.pdf. In batch mode
    /// this seeds the numbering, advancing by one per file.
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub order: u32,

    /// File number used in the merged output's file name
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub file_number: u32,

    /// Output directory for all written artifacts
    ///
    /// Created if it does not exist.
    #[arg(short = 'd', long, value_name = "DIR", default_value = "processed")]
    pub out_dir: PathBuf,

    /// Orientation policy
    ///
    /// - preserve: scale each axis independently, never rotate
    /// - rotate: rotate portrait pages into the target orientation
    /// - auto: swap the target to match each page, keep aspect ratio
    #[arg(short, long, value_name = "POLICY", default_value = "auto")]
    #[arg(value_parser = ["preserve", "rotate", "auto"])]
    pub policy: String,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    /// Useful for scripts and automation.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show detailed information about the operation
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the orientation policy is invalid or
    /// configuration validation fails.
    pub fn to_config(&self) -> Result<Config> {
        let policy = OrientationPolicy::from_str(&self.policy)?;

        let config = Config {
            input: self.input.clone(),
            size_name: self.size.clone(),
            order_number: self.order,
            file_number: self.file_number,
            output_dir: self.out_dir.clone(),
            policy,
            quiet: self.quiet,
            verbose: self.verbose,
        };

        config
            .validate()
            .map_err(|e| PdfResizeError::invalid_config(e.to_string()))?;

        Ok(config)
    }

    /// Validate CLI arguments before processing.
    ///
    /// Performs early validation that doesn't require file I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<()> {
        // Shouldn't happen with clap, but be safe
        if self.input.as_os_str().is_empty() {
            return Err(PdfResizeError::invalid_config("No input specified"));
        }

        if self.size.trim().is_empty() {
            return Err(PdfResizeError::invalid_config("Paper size cannot be empty"));
        }

        if !["preserve", "rotate", "auto"].contains(&self.policy.as_str()) {
            return Err(PdfResizeError::invalid_config(format!(
                "Invalid orientation policy: {}. Must be one of: preserve, rotate, auto",
                self.policy
            )));
        }

        Ok(())
    }
}
