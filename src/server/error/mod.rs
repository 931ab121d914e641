//! Error types for the Holocron server application.
//!
//! This module provides the error handling system, with specialized error types
//! for each domain (session users, the people/planet catalog, favorite
//! management). All errors implement `IntoResponse` for Axum HTTP responses and
//! use `thiserror` for ergonomic error definitions with automatic `Display` and
//! `Error` trait implementations.

pub mod auth;
pub mod catalog;
pub mod favorite;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, catalog::CatalogError, favorite::FavoriteError},
};

/// Main error type for the Holocron server application.
///
/// This enum aggregates all domain-specific error types and external library
/// errors into a single unified error type. It uses `thiserror`'s `#[from]`
/// attribute to enable automatic conversion from underlying error types via the
/// `?` operator. The `IntoResponse` implementation maps errors to appropriate
/// HTTP responses for API consumers.
///
/// # Error Categories
/// - Session user errors (no user in session, user missing from database)
/// - Catalog errors (person or planet lookups on absent rows)
/// - Favorite errors (duplicate or missing associations)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Session user error (no user in session, user not in database).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Catalog error (person or planet not found).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Favorite management error (duplicate or missing association).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors (session user, catalog, favorite) respond with status 400 and
/// a `{"msg": ...}` JSON body; everything else is treated as an internal server
/// error (500) with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error"
/// message to the client to avoid leaking implementation details. Used as a fallback
/// for errors that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
