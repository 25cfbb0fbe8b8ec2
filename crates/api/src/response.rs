//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Not-found results
//! travel inside it as `null` (lookups) or `false` (deletes).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: dogs }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
