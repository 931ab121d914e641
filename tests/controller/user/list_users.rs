//! Tests for the list_users endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::user::list_users;

use super::*;

/// Expect 200 OK with an empty list when no users exist
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = list_users(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    Ok(())
}

/// Expect 200 OK with all users serialized, never including the password
#[tokio::test]
async fn success_without_password_field() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.insert_mock_user("luke@rebellion.org").await?;
    test.insert_mock_user("leia@rebellion.org").await?;

    let result = list_users(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = response_json(resp).await;
    let users = json.as_array().unwrap();

    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("email").is_some());
        assert!(user.get("is_active").is_some());
        assert!(user.get("password").is_none());
    }

    Ok(())
}
