//! pdfresize - Resize PDF pages to a standard paper size.
//!
//! A CLI tool that scales PDF pages onto a named paper size, writing
//! one single-page PDF per page plus a merged multi-page PDF.

mod cli;

use clap::Parser;
use std::process;

use crate::cli::Cli;
use pdfresize::config::Config;
use pdfresize::error::PdfResizeError;
use pdfresize::output::{OutputFormatter, display_batch_summary, display_validation_summary};
use pdfresize::resize::{self, BatchProcessor};
use pdfresize::utils::{format_duration, format_file_size};
use pdfresize::validation::{ValidationSummary, Validator};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfResizeError> {
    // Validate CLI arguments
    cli.validate()?;

    // Convert CLI to config
    let config = cli.to_config()?;

    // Create output formatter
    let formatter = OutputFormatter::from_config(&config);

    // Print header
    if formatter.should_print() {
        formatter.section(&format!("{} v{}", pdfresize::NAME, pdfresize::VERSION));
        formatter.blank_line();
    }

    if config.input.is_dir() {
        run_batch(&config, &formatter).await
    } else {
        run_single(&config, &formatter).await
    }
}

/// Process a single input file.
async fn run_single(config: &Config, formatter: &OutputFormatter) -> Result<(), PdfResizeError> {
    formatter.info(&format!("Validating {}...", config.input.display()));

    let validator = Validator::new();
    let result = validator.validate_file(&config.input).await?;

    if formatter.should_print() {
        let summary = ValidationSummary {
            total_files: 1,
            total_pages: result.page_count,
            total_size: result.file_size,
            results: vec![result],
            failures: vec![],
        };
        display_validation_summary(formatter, &summary);
        formatter.blank_line();
    }

    formatter.info(&format!(
        "Resizing to {}...",
        config.size_name.trim().to_uppercase()
    ));

    let outcome = resize::process_pdf(config).await?;

    if formatter.should_print() {
        formatter.blank_line();
        formatter.success(&format!(
            "Successfully created {}",
            outcome.merged_path.display()
        ));
        for (index, path) in outcome.page_paths.iter().enumerate() {
            formatter.list_item(index + 1, &path.display().to_string());
        }

        if formatter.is_verbose() {
            formatter.blank_line();
            formatter.section("Statistics");
            formatter.detail(
                "Pages processed",
                &outcome.statistics.pages_processed.to_string(),
            );
            formatter.detail("Input size", &format_file_size(outcome.statistics.input_size));
            formatter.detail(
                "Merged size",
                &format_file_size(outcome.statistics.output_size),
            );
            formatter.detail(
                "Process time",
                &format_duration(outcome.statistics.process_time),
            );
        }
    }

    Ok(())
}

/// Process every PDF in a directory.
async fn run_batch(config: &Config, formatter: &OutputFormatter) -> Result<(), PdfResizeError> {
    formatter.info(&format!("Processing directory {}...", config.input.display()));
    formatter.blank_line();

    let batch = BatchProcessor::new();
    let outcome = batch.process_dir(config).await?;

    for failure in &outcome.failed {
        formatter.error(&format!(
            "Failed: {}\n  {}",
            failure.path.display(),
            failure.error
        ));
    }

    if formatter.should_print() {
        formatter.blank_line();
        for (index, result) in outcome.completed.iter().enumerate() {
            formatter.list_item(index + 1, &result.merged_path.display().to_string());
        }
    }

    if outcome.completed.is_empty() {
        return Err(PdfResizeError::other(format!(
            "All {} file(s) failed to process",
            outcome.failed.len()
        )));
    }

    if formatter.should_print() {
        formatter.blank_line();
        display_batch_summary(formatter, &outcome);
    }

    Ok(())
}
