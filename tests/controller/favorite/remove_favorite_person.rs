//! Tests for the remove_favorite_person endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::{
    controller::favorite::remove_favorite_person, model::session::user::SessionUserId,
};
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 OK and the favorite row to be deleted
#[tokio::test]
async fn success_removes_favorite() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.insert_mock_user("luke@rebellion.org").await?;
    let person_model = test.insert_mock_person("Leia Organa", "female").await?;
    let favorite_model = test
        .insert_mock_person_favorite(user_model.id, person_model.id)
        .await?;

    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = remove_favorite_person(
        State(test.state()),
        test.session.clone(),
        Path(person_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    assert_eq!(json["msg"], "The person has been removed from favorites");

    // Ensure the favorite has actually been deleted
    let favorite_exists = entity::prelude::Favorite::find_by_id(favorite_model.id)
        .one(&test.state.db)
        .await?;
    assert!(favorite_exists.is_none());

    Ok(())
}

/// Expect 400 Bad Request when the association does not exist
#[tokio::test]
async fn fails_when_not_in_favorites() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.insert_mock_user("luke@rebellion.org").await?;
    let person_model = test.insert_mock_person("Leia Organa", "female").await?;

    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = remove_favorite_person(
        State(test.state()),
        test.session.clone(),
        Path(person_model.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when no user is present in the session
#[tokio::test]
async fn fails_without_session_user() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let person_model = test.insert_mock_person("Leia Organa", "female").await?;

    let result = remove_favorite_person(
        State(test.state()),
        test.session.clone(),
        Path(person_model.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = response_json(resp).await;
    assert_eq!(json["msg"], "No user in session");

    Ok(())
}
