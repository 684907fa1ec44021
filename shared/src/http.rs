//! HTTP helpers for the serverless handler.

use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use serde::Serialize;

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    data: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header("cache-control", "no-store")
        .body(Body::from(serde_json::to_string(data)?))
        .map_err(Box::new)?;
    Ok(response)
}
