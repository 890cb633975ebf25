//! Bin-detection adapter: front-view photo to bin count.

use crate::{fetch_predictions, Prediction};

/// HTTP client for the hosted bin-detection model.
pub struct BinDetector {
    client: reqwest::Client,
    api_url: String,
}

impl BinDetector {
    /// Create a client for the given inference endpoint URL.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Count bins in the front-view image. `None` on any failure or when
    /// the model detects nothing.
    pub async fn count_bins(&self, image_url: &str) -> Option<i64> {
        match fetch_predictions(&self.client, &self.api_url, image_url).await {
            Ok(predictions) => count_from_predictions(&predictions),
            Err(e) => {
                tracing::warn!(image_url, error = %e, "Bin detection call failed");
                None
            }
        }
    }
}

/// One prediction per detected bin; an empty list means the model saw no
/// bins and the submission cannot be validated.
fn count_from_predictions(predictions: &[Prediction]) -> Option<i64> {
    if predictions.is_empty() {
        None
    } else {
        Some(predictions.len() as i64)
    }
}
