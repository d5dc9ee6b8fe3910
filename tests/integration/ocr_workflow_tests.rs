/*!
 * End-to-end tests for the gated OCR comparison workflow: mock provider,
 * file-backed quota gate and the comparison core wired together.
 */

use std::sync::Arc;

use ocrdiff::app_controller::Controller;
use ocrdiff::comparison::ComparisonService;
use ocrdiff::errors::{AppError, OcrError};
use ocrdiff::providers::mock::MockOcr;

use crate::common::{temp_usage_tracker, write_temp_file};

#[tokio::test]
async fn test_compareImages_identicalTexts_reportsFullSimilarity() {
    let (dir, tracker) = temp_usage_tracker(10);
    let img1 = write_temp_file(&dir, "a.jpg", b"image-bytes-1");
    let img2 = write_temp_file(&dir, "b.jpg", b"image-bytes-2");

    let provider = MockOcr::with_texts(vec!["Receipt total 9.99\nThank you", "Receipt total 9.99\nThank you"]);
    let controller = Controller::with_parts(Box::new(provider), Arc::new(tracker), ComparisonService::default());

    let report = controller.compare_images(&img1, &img2).await.expect("compare");
    assert_eq!(report.result.similarity, 100.0);
    assert!(report.result.deleted.is_empty());
    assert!(report.result.modified.is_empty());
    assert!(report.result.added.is_empty());
    assert_eq!(report.text1, report.text2);
}

#[tokio::test]
async fn test_compareImages_changedLine_showsUpInDiff() {
    let (dir, tracker) = temp_usage_tracker(10);
    let img1 = write_temp_file(&dir, "a.jpg", b"bytes");
    let img2 = write_temp_file(&dir, "b.jpg", b"bytes");

    let provider = MockOcr::with_texts(vec![
        "Shipping address line\nCity and postcode",
        "Shipping address lime\nCity and postcode",
    ]);
    let controller = Controller::with_parts(Box::new(provider), Arc::new(tracker), ComparisonService::default());

    let report = controller.compare_images(&img1, &img2).await.expect("compare");
    assert_eq!(report.result.modified.len(), 1);
    assert_eq!(report.result.modified[0].old, "Shipping address line");
    assert_eq!(report.result.modified[0].new, "Shipping address lime");
}

#[tokio::test]
async fn test_compareImages_consumesExactlyTwoQuotaUnits() {
    let (dir, tracker) = temp_usage_tracker(10);
    let tracker = Arc::new(tracker);
    let img1 = write_temp_file(&dir, "a.jpg", b"bytes");
    let img2 = write_temp_file(&dir, "b.jpg", b"bytes");

    let controller = Controller::with_parts(
        Box::new(MockOcr::working()),
        tracker.clone(),
        ComparisonService::default(),
    );
    controller.compare_images(&img1, &img2).await.expect("compare");

    use ocrdiff::usage::UsageGate;
    assert_eq!(tracker.snapshot().expect("snapshot").count, 2);
}

#[tokio::test]
async fn test_compareImages_quotaExhausted_failsWithDistinctError() {
    let (dir, tracker) = temp_usage_tracker(1);
    let tracker = Arc::new(tracker);
    let img1 = write_temp_file(&dir, "a.jpg", b"bytes");
    let img2 = write_temp_file(&dir, "b.jpg", b"bytes");

    // Burn the single allowed request
    use ocrdiff::usage::UsageGate;
    tracker.increment().expect("increment");

    let controller = Controller::with_parts(
        Box::new(MockOcr::working()),
        tracker.clone(),
        ComparisonService::default(),
    );
    let err = controller.compare_images(&img1, &img2).await.expect_err("should reject");

    match err {
        AppError::Ocr(OcrError::QuotaExceeded { used, limit }) => {
            assert_eq!(used, 1);
            assert_eq!(limit, 1);
        }
        other => panic!("expected quota error, got: {}", other),
    }

    // The human-readable message names the quota, not a generic failure
    let message = format!("{}", OcrError::QuotaExceeded { used: 1, limit: 1 });
    assert!(message.contains("quota"));
}

#[tokio::test]
async fn test_compareImages_failedOcr_doesNotConsumeQuota() {
    let (dir, tracker) = temp_usage_tracker(10);
    let tracker = Arc::new(tracker);
    let img1 = write_temp_file(&dir, "a.jpg", b"bytes");
    let img2 = write_temp_file(&dir, "b.jpg", b"bytes");

    let controller = Controller::with_parts(
        Box::new(MockOcr::failing()),
        tracker.clone(),
        ComparisonService::default(),
    );
    controller.compare_images(&img1, &img2).await.expect_err("provider fails");

    use ocrdiff::usage::UsageGate;
    assert_eq!(tracker.snapshot().expect("snapshot").count, 0);
}

#[tokio::test]
async fn test_compareImages_emptyDetections_areVacuouslyIdentical() {
    let (dir, tracker) = temp_usage_tracker(10);
    let img1 = write_temp_file(&dir, "a.jpg", b"bytes");
    let img2 = write_temp_file(&dir, "b.jpg", b"bytes");

    let controller = Controller::with_parts(
        Box::new(MockOcr::empty()),
        Arc::new(tracker),
        ComparisonService::default(),
    );
    let report = controller.compare_images(&img1, &img2).await.expect("compare");
    assert_eq!(report.result.similarity, 100.0);
    assert!(report.result.added.is_empty());
}
