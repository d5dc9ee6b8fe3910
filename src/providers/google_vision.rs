/*!
 * Google Cloud Vision client for text detection.
 *
 * Talks to the `images:annotate` REST endpoint with API-key authentication.
 * Only the TEXT_DETECTION feature is requested; the first annotation in the
 * response carries the full detected text, newline-delimited in reading order.
 */

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::OcrError;
use crate::providers::OcrProvider;

const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";
const TEXT_DETECTION: &str = "TEXT_DETECTION";

/// Google Vision client for OCR requests
#[derive(Debug)]
pub struct GoogleVision {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
}

/// Top-level annotate request body
#[derive(Debug, Serialize)]
struct AnnotateBody {
    requests: Vec<AnnotateRequest>,
}

/// A single image annotation request
#[derive(Debug, Serialize)]
struct AnnotateRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

/// Base64-encoded image payload
#[derive(Debug, Serialize)]
struct ImageContent {
    content: String,
}

/// Requested annotation feature
#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: &'static str,
}

/// Top-level annotate response body
#[derive(Debug, Deserialize)]
struct AnnotateResponseBody {
    #[serde(default)]
    responses: Vec<AnnotateResponse>,
}

/// Annotation result for a single image
#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(rename = "textAnnotations", default)]
    text_annotations: Vec<TextAnnotation>,

    #[serde(default)]
    error: Option<ApiStatus>,
}

/// One detected text annotation; the first entry spans the whole image
#[derive(Debug, Deserialize)]
struct TextAnnotation {
    description: String,
}

/// Per-image error status from the API
#[derive(Debug, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

impl GoogleVision {
    /// Create a new Google Vision client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}?key={}", base, self.api_key)
    }

    async fn annotate(&self, body: &AnnotateBody) -> Result<AnnotateResponseBody, OcrError> {
        let response = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| OcrError::RequestFailed(format!("Failed to reach Vision API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Vision API error ({}): {}", status, error_text);

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(OcrError::AuthenticationError(error_text));
            }
            return Err(OcrError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<AnnotateResponseBody>()
            .await
            .map_err(|e| OcrError::ParseError(format!("Failed to parse Vision response: {}", e)))
    }
}

/// Turn a per-image annotation result into detected text.
///
/// A populated `error` field carries the backend's RPC status and maps to
/// its own error variant; absent annotations mean the image simply contains
/// no text.
fn extract_detected_text(response: AnnotateResponse) -> Result<String, OcrError> {
    if let Some(status) = response.error {
        return Err(OcrError::AnnotationError {
            code: status.code,
            message: status.message,
        });
    }

    Ok(response
        .text_annotations
        .into_iter()
        .next()
        .map(|annotation| annotation.description)
        .unwrap_or_default())
}

#[async_trait]
impl OcrProvider for GoogleVision {
    async fn detect_text(&self, image: &[u8]) -> Result<String, OcrError> {
        let body = AnnotateBody {
            requests: vec![AnnotateRequest {
                image: ImageContent {
                    content: BASE64.encode(image),
                },
                features: vec![Feature {
                    feature_type: TEXT_DETECTION,
                }],
            }],
        };

        let parsed = self.annotate(&body).await?;
        let first = parsed
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| OcrError::ParseError("Vision response contained no results".to_string()))?;

        let detected = extract_detected_text(first)?;
        debug!("Vision detected {} characters of text", detected.chars().count());
        Ok(detected)
    }

    async fn test_connection(&self) -> Result<(), OcrError> {
        // An empty request list is accepted by the endpoint and validates
        // both reachability and the API key
        let body = AnnotateBody { requests: Vec::new() };
        self.annotate(&body).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "google_vision"
    }
}
