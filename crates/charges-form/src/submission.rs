use serde::Serialize;

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum SubmissionState {
    /// Nothing submitted, or the last result was cleared by an edit.
    #[default]
    Idle,
    /// A request has been issued and has not resolved yet.
    InFlight,
    /// The predictor returned an estimate.
    Succeeded(f64),
    /// The request failed; holds the user-visible message.
    Failed(String),
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Returns true once a request has resolved, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    pub fn estimate(&self) -> Option<f64> {
        match self {
            Self::Succeeded(value) => Some(*value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Label for the submit control.
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::InFlight => "Estimating...",
            _ => "Estimate charges",
        }
    }
}
