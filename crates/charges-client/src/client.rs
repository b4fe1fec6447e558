//! HTTP client for the predictor service.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use charges_model::{ErrorBody, HealthStatus, PredictRequest, PredictResponse};

use crate::config::PredictorConfig;
use crate::error::{PredictError, Result};

/// User agent string for predictor requests.
const USER_AGENT_VALUE: &str = concat!("charges-estimator/", env!("CARGO_PKG_VERSION"));

/// Something that turns a coerced form into a charges estimate.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Requests one estimate. Implementations must not retry.
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse>;
}

/// Predictor backed by the HTTP service.
#[derive(Debug, Clone)]
pub struct PredictorClient {
    client: reqwest::Client,
    config: PredictorConfig,
}

impl PredictorClient {
    /// Creates a client for the configured service.
    pub fn new(config: PredictorConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| PredictError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Checks that the service is up.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.config.health_url();
        tracing::debug!("Checking predictor health at {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(server_error(status.as_u16(), &body));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Handles the prediction response, mapping statuses and bodies to errors.
    async fn handle_response(&self, response: reqwest::Response) -> Result<PredictResponse> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let err = server_error(status.as_u16(), &body);
            tracing::warn!("Predictor rejected request: {}", err);
            return Err(err);
        }

        let prediction: PredictResponse = serde_json::from_slice(&body)?;
        tracing::debug!("Predictor answered with status {}", status);
        Ok(prediction)
    }
}

#[async_trait]
impl Predictor for PredictorClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        let url = self.config.predict_url();
        tracing::debug!("Posting prediction request to {}", url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(request)?)
            .send()
            .await?;

        self.handle_response(response).await
    }
}

/// Builds a server error, keeping the body's `detail` string when present.
///
/// Bodies that are not JSON, or whose `detail` is not a string (validation
/// errors carry a list there), leave the detail empty.
fn server_error(status: u16, body: &[u8]) -> PredictError {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail);
    PredictError::Server { status, detail }
}
