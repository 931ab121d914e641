//! Tests for the get_planet endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::planet::get_planet;

use super::*;

/// Expect 200 OK with the planet's fields when the planet exists
#[tokio::test]
async fn success_for_existing_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_model = test.insert_mock_planet("Tatooine", "arid").await?;

    let result = get_planet(State(test.state()), Path(planet_model.id)).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    assert_eq!(json["id"], planet_model.id);
    assert_eq!(json["name"], "Tatooine");
    assert_eq!(json["climate"], "arid");

    Ok(())
}

/// Expect 400 Bad Request when the planet does not exist
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let nonexistent_planet_id = 1;
    let result = get_planet(State(test.state()), Path(nonexistent_planet_id)).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = response_json(resp).await;
    assert_eq!(json["msg"], "Planet not found");

    Ok(())
}
