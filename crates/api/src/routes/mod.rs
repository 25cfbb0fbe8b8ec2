pub mod dog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dogs                      list, create
/// /dogs/featured             list featured
/// /dogs/by-breed?breed=      list by exact breed
/// /dogs/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/dogs", dog::router())
}
