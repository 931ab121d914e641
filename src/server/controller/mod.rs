//! HTTP controller endpoints for the Holocron web API.
//!
//! This module contains Axum handlers for the people and planet catalog, user
//! listing, and favorite management. Controllers handle HTTP requests, validate
//! inputs, interact with services and repositories, and return appropriate HTTP
//! responses. They integrate with tower-sessions for the current user and use
//! utoipa for OpenAPI documentation.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
