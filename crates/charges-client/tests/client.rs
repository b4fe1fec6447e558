//! HTTP behaviour of the predictor client against a mock server.

use charges_client::{PredictError, Predictor, PredictorClient, PredictorConfig};
use charges_model::{FormState, PredictRequest};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PredictorClient {
    PredictorClient::new(PredictorConfig::new(server.uri())).expect("client")
}

fn default_request() -> PredictRequest {
    FormState::default().coerce().expect("defaults coerce")
}

#[tokio::test]
async fn test_predict_posts_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "age": 31,
            "sex": "female",
            "bmi": 27.9,
            "children": 0,
            "smoker": "no",
            "region": "southwest"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "predicted_charges": 4213.5 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .predict(&default_request())
        .await
        .expect("prediction");
    assert_eq!(response.predicted_charges, 4213.5);
}

#[tokio::test]
async fn test_predict_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(serde_json::json!({ "detail": "bad region" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&default_request())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        PredictError::Server {
            status: 422,
            detail: Some("bad region".to_string())
        }
    );
    assert_eq!(err.user_message(), "bad region");
}

#[tokio::test]
async fn test_predict_server_error_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&default_request())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PredictError::Server {
            status: 500,
            detail: None
        }
    ));
    assert_eq!(err.user_message(), "Request failed.");
}

#[tokio::test]
async fn test_predict_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "estimate": 12.0 })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&default_request())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictError::MalformedResponse(_)));
    assert_eq!(err.user_message(), "Something went wrong.");
}

#[tokio::test]
async fn test_predict_connection_refused() {
    // Reserve a free port, then release it so nothing listens there.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        format!("http://{}", listener.local_addr().expect("addr"))
    };

    let client = PredictorClient::new(PredictorConfig::new(uri)).expect("client");
    let err = client.predict(&default_request()).await.unwrap_err();
    assert!(matches!(err, PredictError::Network(_)));
    assert!(!err.user_message().is_empty());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let status = client_for(&server).health().await.expect("health");
    assert!(status.is_ok());
}

#[tokio::test]
async fn test_health_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).health().await.unwrap_err();
    assert!(matches!(err, PredictError::Server { status: 503, .. }));
}
