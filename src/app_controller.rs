/*!
 * Application controller wiring the OCR provider, the usage gate and the
 * comparison core together.
 *
 * The quota contract is check-before-call and increment-after-success: the
 * gate is consulted before every backend request and bumped exactly once per
 * request that returned text. The comparison itself is pure and runs only
 * after both OCR calls succeeded.
 */

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::app_config::{Config, OcrProviderType};
use crate::comparison::{ComparisonResult, ComparisonService};
use crate::errors::{AppError, OcrError};
use crate::providers::google_vision::GoogleVision;
use crate::providers::mock::MockOcr;
use crate::providers::OcrProvider;
use crate::usage::{FileUsageTracker, UsageGate};

/// Result of comparing two images, including the raw detected texts
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Text detected in the reference image
    pub text1: String,
    /// Text detected in the compared image
    pub text2: String,
    /// Similarity score and line diff
    #[serde(flatten)]
    pub result: ComparisonResult,
}

/// Main application controller
pub struct Controller {
    provider: Box<dyn OcrProvider>,
    gate: Arc<dyn UsageGate>,
    comparison: ComparisonService,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("provider", &self.provider)
            .field("comparison", &self.comparison)
            .finish_non_exhaustive()
    }
}

impl Controller {
    /// Build a controller from configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        info!("Using OCR provider: {}", config.provider.display_name());
        let provider: Box<dyn OcrProvider> = match config.provider {
            OcrProviderType::GoogleVision => {
                if config.ocr.api_key.is_empty() {
                    return Err(AppError::Config(
                        "Google Vision requires ocr.api_key to be set".to_string(),
                    ));
                }
                Box::new(GoogleVision::new(
                    config.ocr.api_key.clone(),
                    config.ocr.endpoint.clone(),
                    config.ocr.timeout_secs,
                ))
            }
            OcrProviderType::Mock => Box::new(MockOcr::working()),
        };

        let gate = Arc::new(FileUsageTracker::new(
            &config.usage.usage_file,
            config.usage.monthly_limit,
        ));

        Ok(Self::with_parts(provider, gate, ComparisonService::new(config.comparison.clone())))
    }

    /// Assemble a controller from explicit collaborators.
    ///
    /// The gate and provider are injected capabilities; tests pass mocks and
    /// temp-file trackers here.
    pub fn with_parts(
        provider: Box<dyn OcrProvider>,
        gate: Arc<dyn UsageGate>,
        comparison: ComparisonService,
    ) -> Self {
        Self { provider, gate, comparison }
    }

    /// Run OCR on both images and compare the detected texts.
    pub async fn compare_images<P: AsRef<Path>>(
        &self,
        image1: P,
        image2: P,
    ) -> Result<ComparisonReport, AppError> {
        let bytes1 = std::fs::read(&image1)?;
        let bytes2 = std::fs::read(&image2)?;
        info!(
            "Comparing {:?} against {:?} via {}",
            image1.as_ref(),
            image2.as_ref(),
            self.provider.name()
        );

        let text1 = self.gated_detect(&bytes1).await?;
        let text2 = self.gated_detect(&bytes2).await?;

        let result = self.comparison.compare(&text1, &text2);
        info!("Overall similarity: {:.1}%", result.similarity);

        Ok(ComparisonReport { text1, text2, result })
    }

    /// Compare two already-extracted texts without touching the OCR backend.
    pub fn compare_texts(&self, reference_text: &str, compared_text: &str) -> ComparisonResult {
        self.comparison.compare(reference_text, compared_text)
    }

    /// One quota-gated OCR call: check, detect, increment.
    async fn gated_detect(&self, image: &[u8]) -> Result<String, AppError> {
        if !self.gate.check()? {
            let snapshot = self.gate.snapshot()?;
            return Err(OcrError::QuotaExceeded {
                used: snapshot.count,
                limit: snapshot.monthly_limit,
            }
            .into());
        }

        let text = self.provider.detect_text(image).await?;
        let count = self.gate.increment()?;
        debug!("OCR call succeeded; {} requests used this month", count);
        Ok(text)
    }
}
