use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::favorite::FavoriteTarget};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("{0} is already in the user's favorites")]
    AlreadyInFavorites(FavoriteTarget),
    #[error("{0} is not in the user's favorites")]
    NotInFavorites(FavoriteTarget),
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let msg = match self {
            Self::AlreadyInFavorites(target) => format!("{} is already in favorites", target),
            Self::NotInFavorites(target) => format!("{} is not in favorites", target),
        };

        (StatusCode::BAD_REQUEST, Json(ErrorDto { msg })).into_response()
    }
}
