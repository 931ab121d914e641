use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteDto,
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, favorite::FavoriteTarget, session::user::SessionUserId},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

async fn current_user_id(session: &Session) -> Result<i32, Error> {
    SessionUserId::get(session)
        .await?
        .ok_or_else(|| AuthError::UserNotInSession.into())
}

/// Add a planet to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet to favorite")
    ),
    responses(
        (status = 201, description = "Success when favoriting the planet", body = FavoriteDto),
        (status = 400, description = "User or planet not found, or already favorited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    session: Session,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let favorite = FavoriteService::new(&state.db)
        .add_favorite(user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((StatusCode::CREATED, axum::Json(FavoriteDto::from(favorite))).into_response())
}

/// Add a person to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("person_id" = i32, Path, description = "ID of the person to favorite")
    ),
    responses(
        (status = 201, description = "Success when favoriting the person", body = FavoriteDto),
        (status = 400, description = "User or person not found, or already favorited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    session: Session,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let favorite = FavoriteService::new(&state.db)
        .add_favorite(user_id, FavoriteTarget::Person(person_id))
        .await?;

    Ok((StatusCode::CREATED, axum::Json(FavoriteDto::from(favorite))).into_response())
}

/// Remove a planet from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet to unfavorite")
    ),
    responses(
        (status = 200, description = "Success when removing the planet favorite", body = MessageDto),
        (status = 400, description = "User or planet not found, or not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    session: Session,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    FavoriteService::new(&state.db)
        .remove_favorite(user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "The planet has been removed from favorites".to_string(),
        }),
    )
        .into_response())
}

/// Remove a person from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("person_id" = i32, Path, description = "ID of the person to unfavorite")
    ),
    responses(
        (status = 200, description = "Success when removing the person favorite", body = MessageDto),
        (status = 400, description = "User or person not found, or not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    session: Session,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    FavoriteService::new(&state.db)
        .remove_favorite(user_id, FavoriteTarget::Person(person_id))
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "The person has been removed from favorites".to_string(),
        }),
    )
        .into_response())
}
