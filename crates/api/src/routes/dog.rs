//! Route definitions for dog profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::dog;
use crate::state::AppState;

/// Routes mounted at `/dogs`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /featured   -> list_featured
/// GET    /by-breed   -> list_by_breed
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dog::list).post(dog::create))
        .route("/featured", get(dog::list_featured))
        .route("/by-breed", get(dog::list_by_breed))
        .route(
            "/{id}",
            get(dog::get_by_id).put(dog::update).delete(dog::delete),
        )
}
