use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, catalog::PersonDto},
    server::{
        data::people::PeopleRepository,
        error::{catalog::CatalogError, Error},
        model::app::AppState,
    },
};

pub static PEOPLE_TAG: &str = "people";

/// List all people in the catalog
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Success when listing people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PeopleRepository::new(&state.db).list().await?;

    let person_dtos: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();

    Ok((StatusCode::OK, axum::Json(person_dtos)).into_response())
}

/// Get a single person by ID
#[utoipa::path(
    get,
    path = "/people/{person_id}",
    tag = PEOPLE_TAG,
    params(
        ("person_id" = i32, Path, description = "ID of the person to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PersonDto),
        (status = 400, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = PeopleRepository::new(&state.db)
        .get_by_id(person_id)
        .await?
        .ok_or(CatalogError::PersonNotFound(person_id))?;

    Ok((StatusCode::OK, axum::Json(PersonDto::from(person))).into_response())
}
