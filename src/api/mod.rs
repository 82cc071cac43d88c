//! # API Module
//!
//! HTTP endpoints of the statistics service.
//!
//! ## Endpoints
//!
//! - [`playlist`] - `GET /playlist?id=..`: tracks of a playlist with the
//!   centroid and MSE of their audio features.
//! - [`recs`] - `GET /recs?id=..&seeds=..&<attribute>=..`: the same
//!   statistics for tracks recommended from seeds of that playlist.
//! - [`health`] - `GET /health`: status and version for monitoring.
//!
//! ## Response Conventions
//!
//! Successful statistics responses are JSON with
//! `Access-Control-Allow-Origin: *`. Failures are answered with status 200
//! and a short plain-text message as the body, without a `Content-Type`
//! header. Existing clients check the body rather than the status, so this
//! shape must not change.
//!
//! A repeated query parameter counts with its first value only.

use std::collections::HashMap;

mod health;
mod playlist;
mod recs;

use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::Response,
};
use tracing::warn;

use crate::{management::StatsError, types::PlaylistInfo};

pub use health::health;
pub use playlist::playlist;
pub use recs::recs;

/// Collapses raw query pairs into a map, keeping the first value of a key.
pub fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut params = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

pub(crate) fn respond(result: Result<PlaylistInfo, StatsError>) -> Response {
    match result {
        Ok(info) => json_response(&info),
        Err(e) => text_response(&e.to_string()),
    }
}

fn json_response(info: &PlaylistInfo) -> Response {
    let body = match serde_json::to_vec(info) {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "failed to encode playlist info");
            return text_response("failed to encode response");
        }
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::OK;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

fn text_response(message: &str) -> Response {
    Response::new(Body::from(message.to_string()))
}
