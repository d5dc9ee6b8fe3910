/*!
 * Monthly usage tracking for the OCR quota gate.
 *
 * Every successful OCR call consumes one unit of a fixed monthly budget. The
 * counter lives in a small JSON file keyed by calendar month and resets
 * automatically when a new month is first observed. The gate is an injected
 * capability so the comparison core and its tests never touch shared state.
 */

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::errors::UsageError;

/// Default ceiling on OCR requests per calendar month
pub const DEFAULT_MONTHLY_LIMIT: u32 = 1000;

/// Point-in-time view of the usage counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Calendar month the counter applies to, as "YYYY-MM"
    pub month: String,
    /// Requests consumed in that month
    pub count: u32,
    /// The configured monthly ceiling
    pub monthly_limit: u32,
    /// Whether the ceiling has been reached
    pub limit_reached: bool,
}

/// Quota gate consulted before and after each OCR call.
///
/// Callers must `check` before invoking the backend and `increment` exactly
/// once per successful call.
pub trait UsageGate: Send + Sync {
    /// Whether another OCR call is currently allowed
    fn check(&self) -> Result<bool, UsageError>;

    /// Record one successful OCR call; returns the new count
    fn increment(&self) -> Result<u32, UsageError>;

    /// Current month, count and limit
    fn snapshot(&self) -> Result<UsageSnapshot, UsageError>;
}

/// On-disk representation of the counter
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UsageRecord {
    month: String,
    count: u32,
}

/// File-backed usage gate with a monthly rollover
pub struct FileUsageTracker {
    path: PathBuf,
    monthly_limit: u32,
    // Serializes read-modify-write cycles on the usage file
    lock: Mutex<()>,
}

impl FileUsageTracker {
    /// Create a tracker over the given usage file.
    ///
    /// The file is created lazily on first access; a missing file is an
    /// empty counter, not an error.
    pub fn new<P: AsRef<Path>>(path: P, monthly_limit: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            monthly_limit,
            lock: Mutex::new(()),
        }
    }

    fn current_month() -> String {
        Local::now().format("%Y-%m").to_string()
    }

    /// Load the record, resetting it when the file is missing or the stored
    /// month is not the current one. Callers must hold the lock.
    fn load_current(&self) -> Result<UsageRecord, UsageError> {
        let current_month = Self::current_month();

        if !self.path.exists() {
            let record = UsageRecord { month: current_month, count: 0 };
            self.store(&record)?;
            return Ok(record);
        }

        let raw = fs::read_to_string(&self.path)?;
        let record: UsageRecord =
            serde_json::from_str(&raw).map_err(|e| UsageError::Corrupt(e.to_string()))?;

        if record.month != current_month {
            info!("Usage counter rolled over from {} to {}", record.month, current_month);
            let fresh = UsageRecord { month: current_month, count: 0 };
            self.store(&fresh)?;
            return Ok(fresh);
        }

        Ok(record)
    }

    fn store(&self, record: &UsageRecord) -> Result<(), UsageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let serialized = serde_json::to_string_pretty(record)
            .map_err(|e| UsageError::Corrupt(e.to_string()))?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl UsageGate for FileUsageTracker {
    fn check(&self) -> Result<bool, UsageError> {
        let _guard = self.lock.lock();
        let record = self.load_current()?;
        Ok(record.count < self.monthly_limit)
    }

    fn increment(&self) -> Result<u32, UsageError> {
        let _guard = self.lock.lock();
        let mut record = self.load_current()?;
        record.count += 1;
        self.store(&record)?;
        if record.count >= self.monthly_limit {
            warn!(
                "Monthly OCR quota reached: {} of {} requests",
                record.count, self.monthly_limit
            );
        }
        Ok(record.count)
    }

    fn snapshot(&self) -> Result<UsageSnapshot, UsageError> {
        let _guard = self.lock.lock();
        let record = self.load_current()?;
        Ok(UsageSnapshot {
            month: record.month,
            count: record.count,
            monthly_limit: self.monthly_limit,
            limit_reached: record.count >= self.monthly_limit,
        })
    }
}

/// Gate that never rejects and never counts; used for offline text
/// comparison where no metered backend is involved
pub struct UnlimitedGate;

impl UsageGate for UnlimitedGate {
    fn check(&self) -> Result<bool, UsageError> {
        Ok(true)
    }

    fn increment(&self) -> Result<u32, UsageError> {
        Ok(0)
    }

    fn snapshot(&self) -> Result<UsageSnapshot, UsageError> {
        Ok(UsageSnapshot {
            month: FileUsageTracker::current_month(),
            count: 0,
            monthly_limit: u32::MAX,
            limit_reached: false,
        })
    }
}
