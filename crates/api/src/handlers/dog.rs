//! Handlers for the `/dogs` resource.
//!
//! Every handler validates its input against the dog field rules before
//! reaching the repository. Lookups that match nothing answer `null` (or
//! `false` for deletes) inside the data envelope instead of a 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawsome_core::dog::{self as rules, DogFilter};
use pawsome_core::types::DbId;
use pawsome_db::models::dog::{CreateDog, UpdateDog};
use pawsome_db::repositories::DogRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /dogs/by-breed`.
#[derive(Debug, Deserialize)]
pub struct BreedParams {
    pub breed: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a create payload as a whole.
fn validate_create_input(input: &CreateDog) -> AppResult<()> {
    rules::validate_required_text("name", &input.name)?;
    rules::validate_required_text("breed", &input.breed)?;
    rules::validate_url("logo_url", input.logo_url.as_deref())?;
    rules::validate_url("photo_url", input.photo_url.as_deref())?;
    rules::validate_age(input.age)?;
    Ok(())
}

/// Validate an update payload. Only specified fields are checked.
fn validate_update_input(input: &UpdateDog) -> AppResult<()> {
    rules::validate_required_patch("name", &input.name, |v| {
        rules::validate_required_text("name", v)
    })?;
    rules::validate_required_patch("breed", &input.breed, |v| {
        rules::validate_required_text("breed", v)
    })?;
    rules::validate_required_patch("is_featured", &input.is_featured, |_| Ok(()))?;
    rules::validate_url_patch("logo_url", &input.logo_url)?;
    rules::validate_url_patch("photo_url", &input.photo_url)?;
    rules::validate_age_patch(&input.age)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/dogs
///
/// Create a new dog profile.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDog>,
) -> AppResult<impl IntoResponse> {
    validate_create_input(&input)?;

    let dog = DogRepo::create(&state.pool, &input).await?;

    tracing::info!(
        dog_id = dog.id,
        breed = %dog.breed,
        is_featured = dog.is_featured,
        "Dog created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: dog })))
}

/// GET /api/v1/dogs?breed=&is_featured=&limit=&offset=
///
/// List every dog, newest first. The filter parameters are validated but
/// not applied.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<DogFilter>,
) -> AppResult<impl IntoResponse> {
    filter.check()?;
    let dogs = DogRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: dogs }))
}

/// GET /api/v1/dogs/featured
///
/// List featured dogs, newest first.
pub async fn list_featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let dogs = DogRepo::list_featured(&state.pool).await?;
    Ok(Json(DataResponse { data: dogs }))
}

/// GET /api/v1/dogs/by-breed?breed=Beagle
///
/// List dogs of exactly this breed (case-sensitive), ordered by name.
pub async fn list_by_breed(
    State(state): State<AppState>,
    Query(params): Query<BreedParams>,
) -> AppResult<impl IntoResponse> {
    let dogs = DogRepo::list_by_breed(&state.pool, &params.breed).await?;
    Ok(Json(DataResponse { data: dogs }))
}

/// GET /api/v1/dogs/{id}
///
/// Fetch a single dog. Unknown ids yield `{ "data": null }`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let dog = DogRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: dog }))
}

/// PUT /api/v1/dogs/{id}
///
/// Partially update a dog. Omitted fields are kept, `null` clears a
/// nullable field. Unknown ids yield `{ "data": null }`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDog>,
) -> AppResult<impl IntoResponse> {
    validate_update_input(&input)?;

    let dog = DogRepo::update(&state.pool, id, &input).await?;

    match &dog {
        Some(_) if input.has_changes() => tracing::info!(dog_id = id, "Dog updated"),
        Some(_) => {}
        None => tracing::debug!(dog_id = id, "Update target not found"),
    }

    Ok(Json(DataResponse { data: dog }))
}

/// DELETE /api/v1/dogs/{id}
///
/// Hard-delete a dog. Answers `{ "data": true }` if a row was removed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DogRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(dog_id = id, "Dog deleted");
    }

    Ok(Json(DataResponse { data: deleted }))
}
