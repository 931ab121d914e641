//! Tests for the get_user_favorites endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::{controller::user::get_user_favorites, model::session::user::SessionUserId};

use super::*;

/// Expect 200 OK with the current user's favorites
#[tokio::test]
async fn success_with_favorites() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.insert_mock_user("luke@rebellion.org").await?;
    let planet_model = test.insert_mock_planet("Tatooine", "arid").await?;
    let favorite_model = test
        .insert_mock_planet_favorite(user_model.id, planet_model.id)
        .await?;

    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = get_user_favorites(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    let favorites = json.as_array().unwrap();

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], favorite_model.id);
    assert_eq!(favorites[0]["user_id"], user_model.id);
    assert_eq!(favorites[0]["planet_id"], planet_model.id);

    Ok(())
}

/// Expect 200 OK with an empty list when the user has no favorites
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.insert_mock_user("luke@rebellion.org").await?;

    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = get_user_favorites(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    Ok(())
}

/// Expect 400 Bad Request when no user is present in the session
#[tokio::test]
async fn fails_without_session_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = get_user_favorites(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = response_json(resp).await;
    assert_eq!(json["msg"], "No user in session");

    Ok(())
}

/// Expect 400 Bad Request when the session user is missing from the database
#[tokio::test]
async fn fails_for_user_missing_from_database() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let nonexistent_user_id = 999;
    SessionUserId::insert(&test.session, nonexistent_user_id)
        .await
        .unwrap();

    let result = get_user_favorites(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = response_json(resp).await;
    assert_eq!(json["msg"], "User not found");

    Ok(())
}
