//! Configuration for reaching the predictor service.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the base URL at deployment time.
pub const API_BASE_ENV: &str = "CHARGES_API_BASE";

/// Where the predictor lives.
///
/// No request timeout is configured here; the transport's own defaults apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Base URL of the predictor, without the endpoint path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl PredictorConfig {
    /// Creates a configuration for an explicit base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads the base URL from [`API_BASE_ENV`], falling back to the default
    /// when the variable is unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(API_BASE_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    /// Replaces the base URL when an override is given.
    #[must_use]
    pub fn with_override(self, base_url: Option<String>) -> Self {
        match base_url {
            Some(base) => Self::new(base),
            None => self,
        }
    }

    /// Full URL of the prediction endpoint.
    #[must_use]
    pub fn predict_url(&self) -> String {
        self.endpoint("predict")
    }

    /// Full URL of the health endpoint.
    #[must_use]
    pub fn health_url(&self) -> String {
        self.endpoint("health")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}
