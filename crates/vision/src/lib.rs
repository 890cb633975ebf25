//! Clients for the hosted vision inference services.
//!
//! Two external models back the waste-upload flow: a bin detector that
//! counts bins in a front-view photo, and a waste classifier that labels
//! the contents of a top-view photo. Both speak the same JSON contract --
//! `POST { "image_url": ... }` returning a prediction list -- and both
//! fail closed: network errors, non-2xx statuses, and empty model output
//! all collapse to `None` at the public boundary.

use serde::Deserialize;

pub mod bin_counter;
pub mod classifier;

pub use bin_counter::BinDetector;
pub use classifier::WasteClassifier;

/// One prediction from either model.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

/// Response body shared by both inference endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct PredictionsResponse {
    pub predictions: Vec<Prediction>,
}

/// Errors from the inference HTTP layer. Internal only; the public
/// adapter methods flatten them to `None`.
#[derive(Debug, thiserror::Error)]
pub enum VisionApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Inference API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// Submit an image URL to an inference endpoint and parse the prediction
/// list.
pub(crate) async fn fetch_predictions(
    client: &reqwest::Client,
    endpoint: &str,
    image_url: &str,
) -> Result<Vec<Prediction>, VisionApiError> {
    let body = serde_json::json!({ "image_url": image_url });

    let response = client.post(endpoint).json(&body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(VisionApiError::ApiError {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: PredictionsResponse = response.json().await?;
    Ok(parsed.predictions)
}
