/*!
 * Mock OCR provider for testing.
 *
 * Simulates backend behaviors without network access:
 * - `MockOcr::working()` - always succeeds with a fixed text
 * - `MockOcr::with_texts(...)` - returns queued texts, one per call
 * - `MockOcr::empty()` - succeeds with no detected text
 * - `MockOcr::failing()` - always fails with a request error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::OcrError;
use crate::providers::OcrProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a fixed detected text
    Working,
    /// Returns the queued texts in order, empty once exhausted
    Queued(Vec<String>),
    /// Succeeds with an empty detection (image without text)
    Empty,
    /// Always fails with a request error
    Failing,
}

/// Mock OCR provider
#[derive(Debug)]
pub struct MockOcr {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of detect calls made so far
    call_count: Arc<AtomicUsize>,
}

impl MockOcr {
    /// Create a mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Provider that always detects the same placeholder text
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Provider that returns the given texts, one per call, in order
    pub fn with_texts<S: Into<String>>(texts: Vec<S>) -> Self {
        Self::new(MockBehavior::Queued(texts.into_iter().map(Into::into).collect()))
    }

    /// Provider that detects no text at all
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Provider that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of detect calls made against this provider
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OcrProvider for MockOcr {
    async fn detect_text(&self, _image: &[u8]) -> Result<String, OcrError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working => Ok("The quick brown fox\njumps over the lazy dog".to_string()),
            MockBehavior::Queued(texts) => Ok(texts.get(call).cloned().unwrap_or_default()),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Failing => Err(OcrError::RequestFailed("mock provider failure".to_string())),
        }
    }

    async fn test_connection(&self) -> Result<(), OcrError> {
        match self.behavior {
            MockBehavior::Failing => Err(OcrError::RequestFailed("mock provider failure".to_string())),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
