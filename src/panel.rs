use crate::types::Prediction;

/// Holds the latest displayed prediction. Last write wins, but only in
/// sequence order: a response from an older request never replaces a newer
/// one.
#[derive(Debug, Default)]
pub struct ResultPanel {
    latest: Option<Prediction>,
}

impl ResultPanel {
    /// Accept a prediction unless it is stale. Returns false when dropped.
    pub fn apply(&mut self, prediction: Prediction) -> bool {
        if let Some(current) = &self.latest {
            if prediction.seq < current.seq {
                tracing::debug!(
                    stale = prediction.seq,
                    current = current.seq,
                    "dropping stale prediction"
                );
                return false;
            }
        }
        self.latest = Some(prediction);
        true
    }

    pub fn latest(&self) -> Option<&Prediction> {
        self.latest.as_ref()
    }

    /// The display line, or None before the first prediction. A response
    /// that carried no `traffic_volume` renders with an empty value.
    pub fn render(&self) -> Option<String> {
        self.latest.map(|p| match p.traffic_volume {
            Some(v) => format!("Predicted Traffic Volume: {}", format_volume(v)),
            None => "Predicted Traffic Volume: ".to_string(),
        })
    }
}

// Integral volumes print without a trailing ".0".
fn format_volume(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
