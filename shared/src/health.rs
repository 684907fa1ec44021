//! Deployment health payload.
//!
//! The JSON keys match what the web front end's deploy check already reads,
//! including the `nodeVersion` key.

use chrono::{SecondsFormat, Utc};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use serde::Serialize;

use crate::config::PRIMARY_URI_VAR;
use crate::http::json_response;

/// Variable set on the production deployment platform.
pub const DEPLOYMENT_FLAG_VAR: &str = "VERCEL";

/// Variable holding the media host account name.
pub const MEDIA_HOST_VAR: &str = "CLOUDINARY_CLOUD_NAME";

const RUNTIME_VERSION: &str = concat!("rust ", env!("CARGO_PKG_RUST_VERSION"));

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub env: EnvironmentSnapshot,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSnapshot {
    pub node_version: &'static str,
    pub platform: &'static str,
    pub vercel: bool,
    pub has_mongo_uri: bool,
    pub has_cloudinary: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthFailure {
    pub success: bool,
    pub error: String,
    pub stack: String,
}

impl HealthFailure {
    pub fn from_error(error: &anyhow::Error) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            stack: format!("{:?}", error),
        }
    }
}

impl EnvironmentSnapshot {
    pub fn capture<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).is_some_and(|v| !v.trim().is_empty());
        Self {
            node_version: RUNTIME_VERSION,
            platform: std::env::consts::OS,
            vercel: lookup(DEPLOYMENT_FLAG_VAR).is_some(),
            has_mongo_uri: present(PRIMARY_URI_VAR),
            has_cloudinary: present(MEDIA_HOST_VAR),
        }
    }
}

impl HealthReport {
    pub fn capture<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            success: true,
            message: "API is working",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            env: EnvironmentSnapshot::capture(lookup),
        }
    }
}

/// Build the health response, falling back to a 500 body on failure.
pub fn health_response<F>(lookup: F) -> Result<Response<Body>, lambda_http::Error>
where
    F: Fn(&str) -> Option<String>,
{
    respond(&HealthReport::capture(lookup))
}

/// Serialize `report` as a 200 response, or describe the failure as a 500.
fn respond<T: Serialize>(report: &T) -> Result<Response<Body>, lambda_http::Error> {
    match json_response(StatusCode::OK, report) {
        Ok(response) => Ok(response),
        Err(e) => {
            let error = anyhow::anyhow!(e).context("failed to build health response");
            tracing::error!(error = ?error, "Health check failed");
            json_response(StatusCode::INTERNAL_SERVER_ERROR, &HealthFailure::from_error(&error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn body_json(response: &Response<Body>) -> Value {
        serde_json::from_slice(response.body().as_ref()).unwrap()
    }

    #[test]
    fn test_ok_response_shape() {
        let response = health_response(lookup(&[])).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");

        let body = body_json(&response);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "API is working");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
        let env = body["env"].as_object().unwrap();
        let keys: Vec<_> = env.keys().map(String::as_str).collect();
        assert_eq!(keys, ["nodeVersion", "platform", "vercel", "hasMongoUri", "hasCloudinary"]);
        assert!(env["nodeVersion"].as_str().unwrap().starts_with("rust "));
    }

    #[test]
    fn test_flags_reflect_environment() {
        let snapshot = EnvironmentSnapshot::capture(lookup(&[
            ("MONGODB_URI", "mongodb+srv://cluster0.example.net"),
            ("CLOUDINARY_CLOUD_NAME", "fest-media"),
            ("VERCEL", "1"),
        ]));
        assert!(snapshot.has_mongo_uri);
        assert!(snapshot.has_cloudinary);
        assert!(snapshot.vercel);

        let snapshot = EnvironmentSnapshot::capture(lookup(&[("MONGO_URI", "mongodb://legacy")]));
        assert!(!snapshot.has_mongo_uri);
        assert!(!snapshot.has_cloudinary);
        assert!(!snapshot.vercel);
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let snapshot = EnvironmentSnapshot::capture(lookup(&[("MONGODB_URI", ""), ("CLOUDINARY_CLOUD_NAME", " ")]));
        assert!(!snapshot.has_mongo_uri);
        assert!(!snapshot.has_cloudinary);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("clock unavailable"))
        }
    }

    #[test]
    fn test_serialization_failure_becomes_500_body() {
        let response = respond(&Unserializable).unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(&response);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "failed to build health response");
        assert!(body["stack"].as_str().unwrap().contains("clock unavailable"));
    }

    #[test]
    fn test_failure_body_carries_chain() {
        let error = anyhow::anyhow!("socket closed").context("failed to serialize health report");
        let failure = HealthFailure::from_error(&error);
        assert!(!failure.success);
        assert_eq!(failure.error, "failed to serialize health report");
        assert!(failure.stack.contains("socket closed"));
    }
}
