//! Waste-classification adapter: top-view photo to waste labels.

use crate::{fetch_predictions, Prediction};

/// HTTP client for the hosted waste-classification model.
pub struct WasteClassifier {
    client: reqwest::Client,
    api_url: String,
}

impl WasteClassifier {
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

    /// Classify the contents of one top-view image. Returns the raw label
    /// list (one entry per prediction, duplicates possible); `None` on any
    /// failure or empty model output. Label normalization and set
    /// semantics belong to the caller.
    pub async fn classify(&self, image_url: &str) -> Option<Vec<String>> {
        match fetch_predictions(&self.client, &self.api_url, image_url).await {
            Ok(predictions) => labels_from_predictions(predictions),
            Err(e) => {
                tracing::warn!(image_url, error = %e, "Waste classification call failed");
                None
            }
        }
    }
}

fn labels_from_predictions(predictions: Vec<Prediction>) -> Option<Vec<String>> {
    if predictions.is_empty() {
        return None;
    }
    Some(predictions.into_iter().map(|p| p.label).collect())
}
