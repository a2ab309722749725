//! HTTP playground server for exercising the courier core end-to-end.
//!
//! Three routes cover the outcome shapes the dispatch engine classifies:
//! `/greet` for a plain success, `/status/{code}` to provoke any status
//! code, and `/echo` to reflect the request back so tests can observe what
//! actually went over the wire (header merging in particular). Every
//! response carries a generated `x-request-id` header.

use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

/// Reflection of a received request, returned by `/echo`.
///
/// Headers are folded into a sorted map (first value wins per name) so
/// assertions don't depend on wire ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoReply {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/greet", get(greet))
        .route("/status/{code}", any(status))
        .route("/echo", post(echo).put(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn request_id() -> [(&'static str, String); 1] {
    [("x-request-id", Uuid::new_v4().to_string())]
}

async fn greet() -> impl IntoResponse {
    (request_id(), "hello")
}

async fn status(Path(code): Path<u16>) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    let body = format!("status {}", status.as_u16());
    (status, request_id(), body).into_response()
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> impl IntoResponse {
    let mut folded = BTreeMap::new();
    for (name, value) in &headers {
        folded
            .entry(name.as_str().to_string())
            .or_insert_with(|| String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    let reply = EchoReply {
        method: method.to_string(),
        headers: folded,
        body,
    };
    (request_id(), Json(reply))
}
