//! Form controller for the insurance charges estimator.
//!
//! [`FormController`] owns the raw form values and the state of the current
//! submission. Display layers (the CLI, a GUI, a test harness) drive it
//! through explicit calls and re-render from its accessors:
//!
//! ```text
//! Idle --submit(valid)--> InFlight --success--> Succeeded
//! Idle --submit(valid)--> InFlight --failure--> Failed
//! InFlight --submit--> InFlight                 (rejected)
//! Succeeded/Failed --field change--> Idle
//! Succeeded/Failed --submit(valid)--> InFlight
//! ```
//!
//! At most one request is in flight at a time. The gate is
//! [`FormController::can_submit`], not a lock: the controller has a single
//! owner and is never shared across threads.

mod controller;
mod submission;

pub use controller::{FormController, can_submit};
pub use submission::SubmissionState;

pub use charges_validate::{ValidationReport, validate};
