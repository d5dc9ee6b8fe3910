/*!
 * Common test utilities shared across the suite.
 */

use std::path::PathBuf;

use tempfile::TempDir;

use ocrdiff::usage::FileUsageTracker;

/// A usage tracker backed by a file in a fresh temp directory.
///
/// Returns the directory guard alongside the tracker so the file outlives
/// the test body.
pub fn temp_usage_tracker(monthly_limit: u32) -> (TempDir, FileUsageTracker) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let tracker = FileUsageTracker::new(dir.path().join("usage.json"), monthly_limit);
    (dir, tracker)
}

/// Write bytes to a file inside the given temp directory and return its path.
pub fn write_temp_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    path
}
