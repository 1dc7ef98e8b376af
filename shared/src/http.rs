//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::Serialize;

use crate::{Error, Result};

/// CORS headers attached to every response, error responses included.
const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
];

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn builder(status: u16) -> lambda_http::http::response::Builder {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    builder
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>> {
    Ok(builder(status).body(Body::from(serde_json::to_string(data)?))?)
}

/// Create an error response with the given status code and message.
pub fn error_response(status: u16, message: impl Into<String>) -> Result<Response<Body>> {
    json_response(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}

/// Create an empty-bodied response, used for the CORS preflight.
pub fn empty_response(status: u16) -> Result<Response<Body>> {
    Ok(builder(status).body(Body::Empty)?)
}

/// Parse a request body as a JSON object.
///
/// An absent or blank body is treated as `{}`.
pub fn parse_json_body(body: &Body) -> Result<serde_json::Value> {
    let bytes = body.as_ref();
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }

    serde_json::from_slice(bytes)
        .map_err(|_| Error::Validation("Invalid JSON in request body".to_string()))
}
