use charges_client::{FALLBACK_MESSAGE, PredictError, Predictor};
use charges_model::{Field, FormState, PredictRequest, PredictResponse};
use charges_validate::{ValidationReport, validate};

use crate::submission::SubmissionState;

/// True iff the form validates and no request is in flight.
pub fn can_submit(state: &FormState, submission: &SubmissionState) -> bool {
    !submission.is_in_flight() && validate(state).is_valid()
}

/// Holds the form and drives submissions to a [`Predictor`].
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
    submission: SubmissionState,
    /// Most recent successful estimate. Survives field edits and is cleared
    /// when the next submission starts.
    last_estimate: Option<f64>,
    /// Set when a field changes while a request is in flight.
    edited_in_flight: bool,
    /// Set when the last estimate answered values that were edited before it
    /// arrived. Cleared when the next submission starts.
    estimate_outdated: bool,
}

impl FormController {
    /// Controller holding the default form values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FormState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Validation of the current values, recomputed on every call.
    pub fn validation(&self) -> ValidationReport {
        validate(&self.state)
    }

    pub fn can_submit(&self) -> bool {
        can_submit(&self.state, &self.submission)
    }

    /// Last successful estimate, which may predate the current values.
    pub fn last_estimate(&self) -> Option<f64> {
        self.last_estimate
    }

    /// True when the last estimate was computed for values that have since
    /// been edited.
    pub fn is_estimate_stale(&self) -> bool {
        self.last_estimate.is_some()
            && (self.estimate_outdated || self.submission.estimate().is_none())
    }

    /// Replace one raw field value.
    ///
    /// A settled submission (succeeded or failed) returns to idle. A request
    /// that is still in flight is left alone and will apply its outcome when
    /// it resolves.
    pub fn update_field(&mut self, field: Field, raw: impl Into<String>) {
        self.state.set(field, raw);
        tracing::debug!(field = %field, "Form field updated");

        if self.submission.is_settled() {
            self.submission = SubmissionState::Idle;
        } else if self.submission.is_in_flight() {
            self.edited_in_flight = true;
        }
    }

    /// First half of a submission: gate, reset, and coerce.
    ///
    /// Returns the request to send, or `None` when the gate rejects the
    /// attempt. A rejected attempt changes nothing.
    pub fn begin_submit(&mut self) -> Option<PredictRequest> {
        if self.submission.is_in_flight() {
            tracing::debug!("Submission rejected: a request is already in flight");
            return None;
        }
        let report = self.validation();
        if !report.is_valid() {
            tracing::debug!(invalid = report.len(), "Submission rejected: form is invalid");
            return None;
        }

        self.last_estimate = None;
        self.edited_in_flight = false;
        self.estimate_outdated = false;

        match self.state.coerce() {
            Ok(request) => {
                self.submission = SubmissionState::InFlight;
                tracing::info!("Submission started");
                Some(request)
            }
            Err(err) => {
                tracing::warn!("Validated form failed to coerce: {}", err);
                self.submission = SubmissionState::Failed(FALLBACK_MESSAGE.to_string());
                None
            }
        }
    }

    /// Second half of a submission: apply the predictor's outcome.
    ///
    /// Ignored unless a request is in flight.
    pub fn finish_submit(&mut self, outcome: Result<PredictResponse, PredictError>) {
        if !self.submission.is_in_flight() {
            tracing::warn!("Discarding predictor outcome: no request in flight");
            return;
        }
        let edited = std::mem::take(&mut self.edited_in_flight);
        if edited {
            tracing::warn!("Form changed while the request was in flight; applying outcome anyway");
        }

        self.submission = match outcome {
            Ok(response) => {
                tracing::info!("Submission succeeded");
                self.last_estimate = Some(response.predicted_charges);
                self.estimate_outdated = edited;
                SubmissionState::Succeeded(response.predicted_charges)
            }
            Err(err) => {
                tracing::warn!("Submission failed: {}", err);
                SubmissionState::Failed(err.user_message().to_string())
            }
        };
    }

    /// Run a whole submission against `predictor`.
    ///
    /// Issues exactly one request when the gate allows it, none otherwise.
    /// Never retries.
    pub async fn submit<P>(&mut self, predictor: &P) -> &SubmissionState
    where
        P: Predictor + ?Sized,
    {
        if let Some(request) = self.begin_submit() {
            let outcome = predictor.predict(&request).await;
            self.finish_submit(outcome);
        }
        &self.submission
    }
}
