use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::favorite::FavoriteService,
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserRepository::new(&state.db).list().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, axum::Json(user_dtos)).into_response())
}

/// List all favorites that belong to the current user
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing the user's favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "No user in session or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = SessionUserId::get(&session)
        .await?
        .ok_or(AuthError::UserNotInSession)?;

    let favorites = FavoriteService::new(&state.db)
        .list_user_favorites(user_id)
        .await?;

    let favorite_dtos: Vec<FavoriteDto> = favorites.into_iter().map(FavoriteDto::from).collect();

    Ok((StatusCode::OK, axum::Json(favorite_dtos)).into_response())
}
