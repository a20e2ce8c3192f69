//! Integration tests for error handling.

use pdfresize::error::PdfResizeError;
use pdfresize::resize;
use tempfile::TempDir;

use crate::common::{base_config, write_pdf};

#[tokio::test]
async fn test_unknown_paper_size_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "in.pdf", &[(595.28, 841.89)]);
    let out_dir = temp_dir.path().join("processed");

    let mut config = base_config(&input, &out_dir);
    config.size_name = "B9".to_string();

    let err = resize::process_pdf(&config).await.unwrap_err();
    assert!(matches!(err, PdfResizeError::UnknownPaperSize { .. }));

    // Fail-fast: the unknown size is rejected before any output exists
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_nonexistent_input() {
    let temp_dir = TempDir::new().unwrap();
    let config = base_config(
        &temp_dir.path().join("missing.pdf"),
        &temp_dir.path().join("processed"),
    );

    let err = resize::process_pdf(&config).await.unwrap_err();
    assert!(matches!(err, PdfResizeError::InputNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_wrong_extension() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("notes.txt");
    std::fs::write(&input, b"plain text").unwrap();

    let config = base_config(&input, &temp_dir.path().join("processed"));

    let err = resize::process_pdf(&config).await.unwrap_err();
    assert!(matches!(err, PdfResizeError::InvalidExtension { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_garbage_pdf() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("garbage.pdf");
    std::fs::write(&input, b"this is not a pdf at all").unwrap();

    let config = base_config(&input, &temp_dir.path().join("processed"));

    let err = resize::process_pdf(&config).await.unwrap_err();
    assert!(matches!(err, PdfResizeError::FailedToLoadPdf { .. }));
    assert!(err.is_recoverable());
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_zero_dimension_page() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "flat.pdf", &[(595.28, 0.0)]);
    let out_dir = temp_dir.path().join("processed");

    let config = base_config(&input, &out_dir);

    let err = resize::process_pdf(&config).await.unwrap_err();
    assert!(matches!(err, PdfResizeError::MalformedPage { page: 1, .. }));
}

#[tokio::test]
async fn test_error_messages_name_the_offending_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = base_config(
        &temp_dir.path().join("missing.pdf"),
        &temp_dir.path().join("processed"),
    );

    let err = resize::process_pdf(&config).await.unwrap_err();
    assert!(err.to_string().contains("missing.pdf"));
}
