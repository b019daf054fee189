//! Final shaping of error responses.
//!
//! [`crate::error::AppError`] renders what it knows on its own (status,
//! reason, message). This layer sits outside the routes and adds what only
//! the request knows: path, request id, timestamp and, when the client asked
//! for it with `?trace`, the error's cause chain.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ErrorBody, ErrorReport};
use crate::router::REQUEST_ID_HEADER;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse<'a> {
    timestamp: DateTime<Utc>,
    path: String,
    #[serde(flatten)]
    body: &'a ErrorBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a str>,
}

pub async fn format_error_response(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let include_trace = wants_trace(request.uri().query());
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let response = next.run(request).await;
    let report = match response.extensions().get::<ErrorReport>().cloned() {
        Some(report) => report,
        // An error response from a layer (e.g. the timeout) has no report.
        None if response.status().is_client_error() || response.status().is_server_error() => {
            ErrorReport::for_status(response.status())
        }
        None => return response,
    };

    let payload = ErrorResponse {
        timestamp: Utc::now(),
        path,
        body: &report.body,
        request_id,
        trace: include_trace.then_some(report.trace.as_str()),
    };
    let bytes = match serde_json::to_vec(&payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize error response");
            return response;
        }
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, Body::from(bytes))
}

/// `?trace`, `?trace=` and `?trace=anything` all count.
fn wants_trace(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair.split('=').next() == Some("trace"))
    })
}
