/*!
 * Tests for the file-backed usage gate.
 */

use crate::common::temp_usage_tracker;
use ocrdiff::usage::UsageGate;

#[test]
fn test_usageGate_freshTracker_allowsCalls() {
    let (_dir, tracker) = temp_usage_tracker(5);
    assert!(tracker.check().expect("check"));
    let snapshot = tracker.snapshot().expect("snapshot");
    assert_eq!(snapshot.count, 0);
    assert_eq!(snapshot.monthly_limit, 5);
    assert!(!snapshot.limit_reached);
}

#[test]
fn test_usageGate_incrementCountsMonotonically() {
    let (_dir, tracker) = temp_usage_tracker(100);
    for expected in 1..=5u32 {
        assert_eq!(tracker.increment().expect("increment"), expected);
    }
    assert_eq!(tracker.snapshot().expect("snapshot").count, 5);
}

#[test]
fn test_usageGate_limitBlocksFurtherCalls() {
    let (_dir, tracker) = temp_usage_tracker(1);
    assert!(tracker.check().expect("check"));
    tracker.increment().expect("increment");

    assert!(!tracker.check().expect("check"));
    let snapshot = tracker.snapshot().expect("snapshot");
    assert!(snapshot.limit_reached);
    assert_eq!(snapshot.count, 1);
}

#[test]
fn test_usageGate_snapshotMonthIsCurrentMonth() {
    let (_dir, tracker) = temp_usage_tracker(10);
    let snapshot = tracker.snapshot().expect("snapshot");
    let expected = chrono::Local::now().format("%Y-%m").to_string();
    assert_eq!(snapshot.month, expected);
}
