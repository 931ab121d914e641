use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Person ID {0:?} not found in database")]
    PersonNotFound(i32),
    #[error("Planet ID {0:?} not found in database")]
    PlanetNotFound(i32),
}

impl CatalogError {
    fn bad_request(msg: &str) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                msg: msg.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::PersonNotFound(person_id) => {
                tracing::debug!(
                    person_id = %person_id,
                    "{}",
                    self
                );

                Self::bad_request("Person not found")
            }
            Self::PlanetNotFound(planet_id) => {
                tracing::debug!(
                    planet_id = %planet_id,
                    "{}",
                    self
                );

                Self::bad_request("Planet not found")
            }
        }
    }
}
