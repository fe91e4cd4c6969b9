use http::StatusCode;
use lambda_http::{Body, Response};
use serde::Serialize;
use serde_json::json;

use crate::models::errors::PushError;

pub fn success_response<T: Serialize>(data: T) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(data, StatusCode::OK)
}

/// Uniform `{ok: false, error: …}` body with the status the category maps to.
pub fn error_response(err: &PushError) -> Result<Response<Body>, lambda_http::Error> {
    response_with_code(json!({ "ok": false, "error": err.to_string() }), err.status_code())
}

pub fn response_with_code<T: Serialize>(
    data: T,
    code: StatusCode,
) -> Result<Response<Body>, lambda_http::Error> {
    let body = serde_json::to_string(&data).map_err(|_| lambda_http::Error::from("Serialization error"))?;
    Response::builder()
        .status(code)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}
