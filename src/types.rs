use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// The four user-entered fields, kept as raw strings until submission.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub temperature: String,
    pub day_of_week: String,
    pub location: String,
    pub time_of_day: String,
}

impl FormState {
    pub fn new(
        temperature: impl Into<String>,
        day_of_week: impl Into<String>,
        location: impl Into<String>,
        time_of_day: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            day_of_week: day_of_week.into(),
            location: location.into(),
            time_of_day: time_of_day.into(),
        }
    }

    /// Names of fields that are empty (whitespace-only counts as empty).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.temperature.trim().is_empty() {
            missing.push("temperature");
        }
        if self.day_of_week.trim().is_empty() {
            missing.push("day_of_week");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.time_of_day.trim().is_empty() {
            missing.push("time_of_day");
        }
        missing
    }

    /// Validate and build the wire request. Presence is checked first; only
    /// then is the temperature parsed. No range check on the value.
    pub fn to_request(&self) -> Result<PredictionRequest, SubmitError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }
        let temperature: f64 = self
            .temperature
            .trim()
            .parse()
            .map_err(|_| SubmitError::InvalidTemperature(self.temperature.clone()))?;
        Ok(PredictionRequest {
            temperature,
            day_of_week: self.day_of_week.clone(),
            location: self.location.clone(),
            time_of_day: self.time_of_day.clone(),
        })
    }
}

/// JSON body sent to the prediction endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    pub temperature: f64,
    pub day_of_week: String,
    pub location: String,
    pub time_of_day: String,
}

/// JSON body returned by the endpoint. A response without `traffic_volume`
/// is accepted as-is; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub traffic_volume: Option<f64>,
}

/// A completed prediction, tagged with the sequence number of the request
/// that produced it so stale responses can be detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub traffic_volume: Option<f64>,
    pub seq: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_empty_ones() {
        let form = FormState::new("72.5", "", "Downtown", "   ");
        assert_eq!(form.missing_fields(), vec!["day_of_week", "time_of_day"]);
    }

    #[test]
    fn full_form_has_no_missing_fields() {
        let form = FormState::new("72.5", "Monday", "Downtown", "Morning");
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn to_request_parses_temperature() {
        let form = FormState::new(" 72.5 ", "Monday", "Downtown", "Morning");
        let req = form.to_request().unwrap();
        assert_eq!(req.temperature, 72.5);
        assert_eq!(req.day_of_week, "Monday");
    }

    #[test]
    fn empty_field_rejected_before_parsing() {
        let form = FormState::new("not a number", "Monday", "", "Morning");
        match form.to_request() {
            Err(SubmitError::MissingFields(missing)) => {
                assert_eq!(missing, vec!["location"]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_temperature_rejected() {
        let form = FormState::new("warm", "Monday", "Downtown", "Morning");
        match form.to_request() {
            Err(SubmitError::InvalidTemperature(raw)) => assert_eq!(raw, "warm"),
            other => panic!("expected InvalidTemperature, got {other:?}"),
        }
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let form = FormState::new("72.5", "Monday", "Downtown", "Morning");
        let body = serde_json::to_value(form.to_request().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "temperature": 72.5,
                "day_of_week": "Monday",
                "location": "Downtown",
                "time_of_day": "Morning",
            })
        );
    }

    #[test]
    fn response_without_volume_deserializes_to_none() {
        let resp: PredictionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.traffic_volume, None);
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let resp: PredictionResponse =
            serde_json::from_str(r#"{"traffic_volume": 4213, "model": "linear"}"#).unwrap();
        assert_eq!(resp.traffic_volume, Some(4213.0));
    }
}
