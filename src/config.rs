use std::env;

/// Endpoint used when `PREDICT_URL` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://traffic-predict.onrender.com/predict";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the prediction endpoint, including the `/predict` path.
    pub endpoint: String,
}

impl ClientConfig {
    /// Read the endpoint from `PREDICT_URL`, falling back to the default.
    pub fn from_env() -> Self {
        let endpoint = env::var("PREDICT_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self { endpoint }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
