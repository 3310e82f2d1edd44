//! Client for a remote traffic-volume prediction endpoint.
//!
//! The flow mirrors the single-screen form it replaces: collect four fields
//! into a [`FormState`], hand it to [`PredictionClient::submit`], and either
//! display the returned volume or one of two alerts. Responses carry a
//! sequence number so a slow response can never overwrite a newer result.

pub mod client;
pub mod config;
pub mod error;
pub mod panel;
pub mod types;

pub use client::PredictionClient;
pub use config::ClientConfig;
pub use error::SubmitError;
pub use panel::ResultPanel;
pub use types::{FormState, Prediction, PredictionRequest, PredictionResponse};
