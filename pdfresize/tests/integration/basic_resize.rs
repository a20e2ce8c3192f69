//! Integration tests for single-file resize operations.

use lopdf::Document;
use pdfresize::config::OrientationPolicy;
use pdfresize::resize::{self, Processor};
use tempfile::TempDir;

use crate::common::{base_config, page_dimensions, write_pdf};

const A1_WIDTH: f32 = 1683.78;
const A1_HEIGHT: f32 = 2383.94;
const TOLERANCE: f32 = 1e-2;

#[tokio::test]
async fn test_resize_single_portrait_page() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "in.pdf", &[(595.28, 841.89)]);
    let out_dir = temp_dir.path().join("processed");

    let config = base_config(&input, &out_dir);
    let outcome = resize::process_pdf(&config).await.unwrap();

    assert!(outcome.merged_path.exists());
    assert_eq!(outcome.page_paths.len(), 1);

    let merged = Document::load(&outcome.merged_path).unwrap();
    assert_eq!(merged.get_pages().len(), 1);

    let (width, height) = page_dimensions(&merged, 1);
    assert!((width - A1_WIDTH).abs() < TOLERANCE);
    assert!((height - A1_HEIGHT).abs() < TOLERANCE);
}

#[tokio::test]
async fn test_resize_landscape_page_auto_swaps_target() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "in.pdf", &[(841.89, 595.28)]);
    let out_dir = temp_dir.path().join("processed");

    let config = base_config(&input, &out_dir);
    let outcome = resize::process_pdf(&config).await.unwrap();

    let merged = Document::load(&outcome.merged_path).unwrap();
    let (width, height) = page_dimensions(&merged, 1);

    assert!((width - A1_HEIGHT).abs() < TOLERANCE);
    assert!((height - A1_WIDTH).abs() < TOLERANCE);
}

#[tokio::test]
async fn test_resize_preserve_policy_uses_literal_target() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "in.pdf", &[(841.89, 595.28)]);
    let out_dir = temp_dir.path().join("processed");

    let mut config = base_config(&input, &out_dir);
    config.policy = OrientationPolicy::Preserve;
    let outcome = resize::process_pdf(&config).await.unwrap();

    let merged = Document::load(&outcome.merged_path).unwrap();
    let (width, height) = page_dimensions(&merged, 1);

    // Landscape source is stretched onto the portrait target
    assert!((width - A1_WIDTH).abs() < TOLERANCE);
    assert!((height - A1_HEIGHT).abs() < TOLERANCE);
}

#[tokio::test]
async fn test_multi_page_input_keeps_page_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(
        &temp_dir,
        "in.pdf",
        &[(595.28, 841.89), (841.89, 595.28), (612.0, 792.0)],
    );
    let out_dir = temp_dir.path().join("processed");

    let config = base_config(&input, &out_dir);
    let outcome = resize::process_pdf(&config).await.unwrap();

    assert_eq!(outcome.page_paths.len(), 3);
    assert_eq!(outcome.statistics.pages_processed, 3);

    let merged = Document::load(&outcome.merged_path).unwrap();
    assert_eq!(merged.get_pages().len(), 3);

    // Middle page was landscape, the others portrait
    let (w1, h1) = page_dimensions(&merged, 1);
    assert!(h1 > w1);
    let (w2, h2) = page_dimensions(&merged, 2);
    assert!(w2 > h2);
    let (w3, h3) = page_dimensions(&merged, 3);
    assert!(h3 > w3);
}

#[tokio::test]
async fn test_per_page_files_are_single_page_and_match_merged() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "in.pdf", &[(595.28, 841.89), (841.89, 595.28)]);
    let out_dir = temp_dir.path().join("processed");

    let config = base_config(&input, &out_dir);
    let outcome = resize::process_pdf(&config).await.unwrap();

    let merged = Document::load(&outcome.merged_path).unwrap();

    for (index, path) in outcome.page_paths.iter().enumerate() {
        let single = Document::load(path).unwrap();
        assert_eq!(single.get_pages().len(), 1);

        let (sw, sh) = page_dimensions(&single, 1);
        let (mw, mh) = page_dimensions(&merged, index as u32 + 1);
        assert!((sw - mw).abs() < TOLERANCE);
        assert!((sh - mh).abs() < TOLERANCE);
    }
}

#[tokio::test]
async fn test_output_file_naming() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "in.pdf", &[(595.28, 841.89), (595.28, 841.89)]);
    let out_dir = temp_dir.path().join("processed");

    let mut config = base_config(&input, &out_dir);
    config.order_number = 1244;
    config.file_number = 2;
    config.size_name = "a1".to_string();

    let processor = Processor::new();
    let outcome = processor.process(&config).await.unwrap();

    assert_eq!(
        outcome.merged_path.file_name().unwrap().to_string_lossy(),
        "Order1244_File2.pdf"
    );

    for (index, path) in outcome.page_paths.iter().enumerate() {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        // Size label is uppercased even for lowercase input
        assert_eq!(
            name,
            format!("output_{}_A1_{}.pdf", processor.token(), index)
        );
    }
}

#[tokio::test]
async fn test_output_directory_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "in.pdf", &[(595.28, 841.89)]);
    let out_dir = temp_dir.path().join("nested").join("processed");

    assert!(!out_dir.exists());

    let config = base_config(&input, &out_dir);
    resize::process_pdf(&config).await.unwrap();

    assert!(out_dir.is_dir());
}

#[tokio::test]
async fn test_resize_to_letter() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "in.pdf", &[(595.28, 841.89)]);
    let out_dir = temp_dir.path().join("processed");

    let mut config = base_config(&input, &out_dir);
    config.size_name = "Letter".to_string();

    let outcome = resize::process_pdf(&config).await.unwrap();
    let merged = Document::load(&outcome.merged_path).unwrap();
    let (width, height) = page_dimensions(&merged, 1);

    assert!((width - 612.0).abs() < TOLERANCE);
    assert!((height - 792.0).abs() < TOLERANCE);
}
