//! Wire shape of a dog profile as served by the API.

use pawsome_core::types::{DbId, Timestamp};
use serde::Deserialize;

/// A dog profile as received from `GET /api/v1/dogs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub photo_url: Option<String>,
    pub age: Option<i32>,
    pub is_featured: bool,
    pub created_at: Timestamp,
}
