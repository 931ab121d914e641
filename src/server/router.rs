//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with their
//! OpenAPI specifications, and Swagger UI is configured to provide interactive
//! API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /people` - List all people
/// - `GET /people/{person_id}` - Get a single person
/// - `GET /planets` - List all planets
/// - `GET /planets/{planet_id}` - Get a single planet
/// - `GET /users` - List all users
/// - `GET /users/favorites` - List the current user's favorites
/// - `POST /favorite/planet/{planet_id}` - Favorite a planet for the current user
/// - `DELETE /favorite/planet/{planet_id}` - Remove a planet favorite
/// - `POST /favorite/people/{person_id}` - Favorite a person for the current user
/// - `DELETE /favorite/people/{person_id}` - Remove a person favorite
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI
/// at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::people::PEOPLE_TAG, description = "People catalog routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite management routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::people::list_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::planet::list_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::user::list_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
