use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::types::{FormState, Prediction, PredictionResponse};

/// Issues one POST per submission against the prediction endpoint.
///
/// Submissions draw a monotonically increasing sequence number, so callers
/// that allow overlapping requests can drop responses that arrive late
/// (see [`crate::ResultPanel`]). No timeout is configured and no retry is
/// attempted; a failed submission just returns to idle.
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
    seq: AtomicU64,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint,
            seq: AtomicU64::new(0),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate the form and, if complete, send it to the endpoint.
    ///
    /// An empty field or a non-numeric temperature fails before any network
    /// activity. A 2xx response with a JSON body always succeeds, even when
    /// `traffic_volume` is absent; everything else is a network error.
    pub async fn submit(&self, form: &FormState) -> Result<Prediction, SubmitError> {
        let request = form.to_request()?;
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;

        tracing::info!(
            seq,
            endpoint = %self.endpoint,
            temperature = request.temperature,
            "submitting prediction request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body: PredictionResponse = response.json().await?;

        tracing::info!(seq, traffic_volume = ?body.traffic_volume, "prediction received");
        Ok(Prediction {
            traffic_volume: body.traffic_volume,
            seq,
        })
    }
}
