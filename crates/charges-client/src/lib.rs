//! Client for the insurance charges predictor service.
//!
//! The predictor is an external HTTP service exposing two endpoints:
//!
//! - `POST /predict` takes the six coerced form values and answers
//!   `{"predicted_charges": <number>}`, or a non-2xx status whose body may
//!   carry a `detail` message.
//! - `GET /health` answers `{"status": "ok"}`.
//!
//! [`PredictorClient`] talks to a real service over `reqwest`. Callers that
//! only need a prediction should depend on the [`Predictor`] trait instead,
//! so another implementation can be swapped in.
//!
//! # Example
//!
//! ```no_run
//! use charges_client::{Predictor, PredictorClient, PredictorConfig};
//! use charges_model::FormState;
//!
//! async fn estimate() -> charges_client::Result<f64> {
//!     let client = PredictorClient::new(PredictorConfig::from_env())?;
//!     let request = FormState::default().coerce().expect("defaults are valid");
//!     let response = client.predict(&request).await?;
//!     Ok(response.predicted_charges)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{Predictor, PredictorClient};
pub use config::{API_BASE_ENV, DEFAULT_API_BASE, PredictorConfig};
pub use error::{FALLBACK_MESSAGE, PredictError, REQUEST_FAILED_MESSAGE, Result};
