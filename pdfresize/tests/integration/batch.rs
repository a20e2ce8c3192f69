//! Integration tests for batch directory processing.

use pdfresize::error::PdfResizeError;
use pdfresize::resize::BatchProcessor;
use tempfile::TempDir;

use crate::common::{base_config, write_pdf};

#[tokio::test]
async fn test_batch_processes_all_files_in_sorted_order() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("drawings");
    std::fs::create_dir(&input_dir).unwrap();

    for name in ["b.pdf", "a.pdf", "c.pdf"] {
        let mut doc = crate::common::build_document(&[(595.28, 841.89)]);
        doc.save(input_dir.join(name)).unwrap();
    }

    let out_dir = temp_dir.path().join("processed");
    let config = base_config(&input_dir, &out_dir);

    let outcome = BatchProcessor::new().process_dir(&config).await.unwrap();

    assert!(outcome.all_succeeded());
    assert_eq!(outcome.completed.len(), 3);

    // Merged names follow sorted input order
    let names: Vec<_> = outcome
        .completed
        .iter()
        .map(|o| o.merged_path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["Order1_File1.pdf", "Order2_File2.pdf", "Order3_File3.pdf"]
    );
}

#[tokio::test]
async fn test_batch_skips_corrupt_file_and_keeps_numbering() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("drawings");
    std::fs::create_dir(&input_dir).unwrap();

    let mut doc = crate::common::build_document(&[(595.28, 841.89)]);
    doc.save(input_dir.join("a.pdf")).unwrap();
    std::fs::write(input_dir.join("b.pdf"), b"not a pdf").unwrap();
    let mut doc = crate::common::build_document(&[(595.28, 841.89)]);
    doc.save(input_dir.join("c.pdf")).unwrap();

    let out_dir = temp_dir.path().join("processed");
    let mut config = base_config(&input_dir, &out_dir);
    config.order_number = 10;
    config.file_number = 5;

    let outcome = BatchProcessor::new().process_dir(&config).await.unwrap();

    assert_eq!(outcome.completed.len(), 2);
    assert_eq!(outcome.failed.len(), 1);
    assert!(outcome.failed[0].path.ends_with("b.pdf"));
    assert!(matches!(
        outcome.failed[0].error,
        PdfResizeError::FailedToLoadPdf { .. }
    ));

    // Numbers advance only on success: c.pdf gets the second slot
    assert!(
        outcome.completed[1]
            .merged_path
            .ends_with("Order11_File6.pdf")
    );
}

#[tokio::test]
async fn test_batch_tokens_differ_per_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("drawings");
    std::fs::create_dir(&input_dir).unwrap();

    for name in ["a.pdf", "b.pdf"] {
        let mut doc = crate::common::build_document(&[(595.28, 841.89)]);
        doc.save(input_dir.join(name)).unwrap();
    }

    let out_dir = temp_dir.path().join("processed");
    let config = base_config(&input_dir, &out_dir);
    let outcome = BatchProcessor::new().process_dir(&config).await.unwrap();

    let token_of = |name: &std::path::Path| {
        let file = name.file_name().unwrap().to_string_lossy().into_owned();
        file.split('_').nth(1).unwrap().to_string()
    };
    let first = token_of(&outcome.completed[0].page_paths[0]);
    let second = token_of(&outcome.completed[1].page_paths[0]);

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_batch_records_write_failures_without_aborting() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("drawings");
    std::fs::create_dir(&input_dir).unwrap();

    for name in ["a.pdf", "b.pdf"] {
        let mut doc = crate::common::build_document(&[(595.28, 841.89)]);
        doc.save(input_dir.join(name)).unwrap();
    }

    // Output directory nested under a regular file cannot be created
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let mut config = base_config(&input_dir, &blocker.join("processed"));
    config.quiet = true;

    let outcome = BatchProcessor::new().process_dir(&config).await.unwrap();

    // Write failures are recorded per file, never abort the batch
    assert_eq!(outcome.completed.len(), 0);
    assert_eq!(outcome.failed.len(), 2);
    for failure in &outcome.failed {
        assert!(matches!(
            failure.error,
            PdfResizeError::FailedToCreateOutput { .. }
        ));
    }
}

#[tokio::test]
async fn test_batch_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("empty");
    std::fs::create_dir(&input_dir).unwrap();

    let config = base_config(&input_dir, &temp_dir.path().join("processed"));
    let err = BatchProcessor::new()
        .process_dir(&config)
        .await
        .unwrap_err();

    assert!(matches!(err, PdfResizeError::NoFilesToProcess));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_batch_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = base_config(
        &temp_dir.path().join("nowhere"),
        &temp_dir.path().join("processed"),
    );

    let err = BatchProcessor::new()
        .process_dir(&config)
        .await
        .unwrap_err();

    assert!(matches!(err, PdfResizeError::InputNotFound { .. }));
}

#[tokio::test]
async fn test_batch_input_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(&temp_dir, "single.pdf", &[(595.28, 841.89)]);

    let config = base_config(&input, &temp_dir.path().join("processed"));
    let err = BatchProcessor::new()
        .process_dir(&config)
        .await
        .unwrap_err();

    assert!(matches!(err, PdfResizeError::InvalidConfig { .. }));
}
