use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

const SERIALIZE_FAILURE: &str = "{\n  \"error\": \"internal service error: response serialization failed\"\n}";

/// Pretty-printed (two-space indent) JSON with explicit `Content-Type`
/// and `Content-Length` headers.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec_pretty(payload) {
        Ok(body) => with_json_headers(status, body),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response body");
            with_json_headers(
                StatusCode::INTERNAL_SERVER_ERROR,
                SERIALIZE_FAILURE.as_bytes().to_vec(),
            )
        }
    }
}

fn with_json_headers(status: StatusCode, body: Vec<u8>) -> Response {
    let length = HeaderValue::from(body.len());
    (
        status,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::CONTENT_LENGTH, length),
        ],
        body,
    )
        .into_response()
}
