use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, catalog::PlanetDto},
    server::{
        data::planet::PlanetRepository,
        error::{catalog::CatalogError, Error},
        model::app::AppState,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List all planets in the catalog
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetRepository::new(&state.db).list().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, axum::Json(planet_dtos)).into_response())
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 400, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetRepository::new(&state.db)
        .get_by_id(planet_id)
        .await?
        .ok_or(CatalogError::PlanetNotFound(planet_id))?;

    Ok((StatusCode::OK, axum::Json(PlanetDto::from(planet))).into_response())
}
