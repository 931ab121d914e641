//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, session-user resolution, and
//! error handling for all API endpoints.

mod favorite;
mod people;

use axum::response::Response;
use holocron_test_utils::prelude::*;

/// Decode a response body into a JSON value for assertions.
async fn response_json(resp: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&body).expect("Response body was not valid JSON")
}
