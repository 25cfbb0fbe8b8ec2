//! Dog profile entity model and DTOs.

use pawsome_core::patch::Patch;
use pawsome_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
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

/// DTO for creating a new dog profile.
///
/// Nullable fields may be omitted or sent as `null`; both store `NULL`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDog {
    pub name: String,
    pub breed: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub is_featured: bool,
}

/// DTO for partially updating a dog profile.
///
/// Each field is omitted (keep), `null` (clear) or a new value. `name`,
/// `breed` and `is_featured` cannot be cleared; handlers reject `null` for
/// them before the repository is reached.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateDog {
    pub name: Patch<String>,
    pub breed: Patch<String>,
    pub description: Patch<String>,
    pub logo_url: Patch<String>,
    pub photo_url: Patch<String>,
    pub age: Patch<i32>,
    pub is_featured: Patch<bool>,
}

impl UpdateDog {
    /// Whether the update touches at least one column.
    pub fn has_changes(&self) -> bool {
        self.name.is_specified()
            || self.breed.is_specified()
            || self.description.is_specified()
            || self.logo_url.is_specified()
            || self.photo_url.is_specified()
            || self.age.is_specified()
            || self.is_featured.is_specified()
    }
}
