//! Tests for the get_person endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::people::get_person;

use super::*;

/// Expect 200 OK with the person's fields when the person exists
#[tokio::test]
async fn success_for_existing_person() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let person_model = test.insert_mock_person("Luke Skywalker", "male").await?;

    let result = get_person(State(test.state()), Path(person_model.id)).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    assert_eq!(json["id"], person_model.id);
    assert_eq!(json["name"], "Luke Skywalker");
    assert_eq!(json["gender"], "male");

    Ok(())
}

/// Expect 400 Bad Request when the person does not exist
#[tokio::test]
async fn fails_for_nonexistent_person() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let nonexistent_person_id = 1;
    let result = get_person(State(test.state()), Path(nonexistent_person_id)).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = response_json(resp).await;
    assert_eq!(json["msg"], "Person not found");

    Ok(())
}
