//! CLI library components for the insurance charges estimator.

pub mod interactive;
pub mod logging;
pub mod render;
