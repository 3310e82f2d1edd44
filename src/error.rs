use thiserror::Error;

/// Alert shown when a required field is empty or not usable.
pub const ALERT_FIELDS_REQUIRED: &str = "All fields are required";
/// Alert shown when the request or response handling fails.
pub const ALERT_API_ERROR: &str = "Error connecting to API";

/// Failure modes of a single submission. Both kinds are recoverable: the
/// user corrects the input (validation) or simply resubmits (network).
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The temperature field is non-empty but does not parse as a number.
    /// JSON has no way to carry NaN, so this is rejected before sending.
    #[error("temperature {0:?} is not a number")]
    InvalidTemperature(String),

    /// Transport failure, non-2xx status, or a body that is not JSON.
    #[error("prediction request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl SubmitError {
    /// True for errors raised before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmitError::MissingFields(_) | SubmitError::InvalidTemperature(_)
        )
    }

    /// The fixed user-facing alert string for this error.
    pub fn alert(&self) -> &'static str {
        if self.is_validation() {
            ALERT_FIELDS_REQUIRED
        } else {
            ALERT_API_ERROR
        }
    }
}
