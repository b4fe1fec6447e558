//! Domain model for the insurance charges estimator.
//!
//! The estimator form collects six inputs. While the user is editing, every
//! input is held as raw text in [`FormState`] so that transient states such
//! as an empty box or a half-typed number can be represented. Coercion into
//! the typed [`PredictRequest`] happens only when a submission starts.
//!
//! The categorical inputs have closed vocabularies ([`Sex`], [`Smoker`],
//! [`Region`]) whose string forms are exactly what the predictor expects on
//! the wire.

pub mod enums;
pub mod error;
pub mod field;
pub mod form;
pub mod payload;

pub use enums::{Region, Sex, Smoker};
pub use error::{CoercionError, Result};
pub use field::Field;
pub use form::{FormState, parse_number};
pub use payload::{ErrorBody, HealthStatus, PredictRequest, PredictResponse};
