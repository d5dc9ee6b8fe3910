/*!
 * Provider implementations for OCR text detection.
 *
 * This module contains client implementations for OCR backends:
 * - Google Vision: Google Cloud Vision `images:annotate` REST API
 * - Mock: configurable in-memory provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::OcrError;

/// Common trait for all OCR providers
///
/// A provider turns raw image bytes into the text detected in the image,
/// in reading order and newline-delimited. An image without any detected
/// text yields an empty string, not an error.
#[async_trait]
pub trait OcrProvider: Send + Sync + Debug {
    /// Detect all text in the given image bytes
    ///
    /// # Arguments
    /// * `image` - Raw image bytes (JPEG, PNG, ...)
    ///
    /// # Returns
    /// * `Result<String, OcrError>` - The detected text, or an error from the backend
    async fn detect_text(&self, image: &[u8]) -> Result<String, OcrError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), OcrError>` - Ok if the backend is reachable, or an error
    async fn test_connection(&self) -> Result<(), OcrError>;

    /// Short identifier for logging
    fn name(&self) -> &'static str;
}

pub mod google_vision;
pub mod mock;
