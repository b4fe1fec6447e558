//! JSON bodies exchanged with the predictor service.

use serde::{Deserialize, Serialize, Serializer};

use crate::enums::{Region, Sex, Smoker};

/// Largest magnitude at which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(serialize_with = "serialize_number")]
    pub age: f64,
    pub sex: Sex,
    #[serde(serialize_with = "serialize_number")]
    pub bmi: f64,
    #[serde(serialize_with = "serialize_number")]
    pub children: f64,
    pub smoker: Smoker,
    pub region: Region,
}

/// Successful response of `POST /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_charges: f64,
}

/// Error body returned by the predictor with a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Writes whole numbers as JSON integers (`31`, not `31.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PredictRequest {
        PredictRequest {
            age: 31.0,
            sex: Sex::Female,
            bmi: 27.9,
            children: 0.0,
            smoker: Smoker::No,
            region: Region::Southwest,
        }
    }

    #[test]
    fn test_request_wire_shape() {
        insta::assert_json_snapshot!(request(), @r#"
        {
          "age": 31,
          "sex": "female",
          "bmi": 27.9,
          "children": 0,
          "smoker": "no",
          "region": "southwest"
        }
        "#);
    }

    #[test]
    fn test_fractional_numbers_stay_floats() {
        let body = serde_json::to_value(PredictRequest {
            age: 40.5,
            ..request()
        })
        .unwrap();
        assert_eq!(body["age"], serde_json::json!(40.5));
    }

    #[test]
    fn test_error_body_detail_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "bad region"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("bad region"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
    }

    #[test]
    fn test_health_status() {
        let status: HealthStatus = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(status.is_ok());
    }
}
