//! Tests for the add_favorite_planet endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::{
    controller::favorite::add_favorite_planet, model::session::user::SessionUserId,
};

use super::*;

/// Expect 201 Created with the created favorite's fields
#[tokio::test]
async fn success_creates_favorite() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.insert_mock_user("luke@rebellion.org").await?;
    let planet_model = test.insert_mock_planet("Tatooine", "arid").await?;

    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = add_favorite_planet(
        State(test.state()),
        test.session.clone(),
        Path(planet_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = response_json(resp).await;
    assert_eq!(json["user_id"], user_model.id);
    assert_eq!(json["planet_id"], planet_model.id);
    assert!(json.get("person_id").is_none());

    Ok(())
}

/// Expect 400 Bad Request when the session user does not exist in the database
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet_model = test.insert_mock_planet("Tatooine", "arid").await?;

    let nonexistent_user_id = 999;
    SessionUserId::insert(&test.session, nonexistent_user_id)
        .await
        .unwrap();

    let result = add_favorite_planet(
        State(test.state()),
        test.session.clone(),
        Path(planet_model.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = response_json(resp).await;
    assert_eq!(json["msg"], "User not found");

    Ok(())
}

/// Expect 400 Bad Request when the planet does not exist
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.insert_mock_user("luke@rebellion.org").await?;

    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let nonexistent_planet_id = 1;
    let result = add_favorite_planet(
        State(test.state()),
        test.session.clone(),
        Path(nonexistent_planet_id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = response_json(resp).await;
    assert_eq!(json["msg"], "Planet not found");

    Ok(())
}

/// Expect 400 Bad Request when the planet is already favorited
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.insert_mock_user("luke@rebellion.org").await?;
    let planet_model = test.insert_mock_planet("Tatooine", "arid").await?;
    test.insert_mock_planet_favorite(user_model.id, planet_model.id)
        .await?;

    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = add_favorite_planet(
        State(test.state()),
        test.session.clone(),
        Path(planet_model.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
