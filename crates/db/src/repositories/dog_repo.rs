//! Repository for the `dogs` table.

use sqlx::PgPool;
use pawsome_core::types::DbId;

use crate::models::dog::{CreateDog, Dog, UpdateDog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, breed, description, logo_url, photo_url, \
    age, is_featured, created_at";

/// Newest first; rows inserted within the same clock tick fall back to insertion order.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD operations for dog profiles.
pub struct DogRepo;

impl DogRepo {
    /// Insert a new dog, returning the created row with its assigned
    /// `id` and `created_at`.
    pub async fn create(pool: &PgPool, input: &CreateDog) -> Result<Dog, sqlx::Error> {
        let query = format!(
            "INSERT INTO dogs \
                 (name, breed, description, logo_url, photo_url, age, is_featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(&input.description)
            .bind(&input.logo_url)
            .bind(&input.photo_url)
            .bind(input.age)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a dog by its ID.
    ///
    /// Returns `None` for ids that were never assigned, including zero and
    /// negative values.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every dog, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs {NEWEST_FIRST}");
        sqlx::query_as::<_, Dog>(&query).fetch_all(pool).await
    }

    /// List featured dogs, newest first.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE is_featured = true {NEWEST_FIRST}");
        sqlx::query_as::<_, Dog>(&query).fetch_all(pool).await
    }

    /// List dogs whose breed matches exactly (case-sensitive), ordered by name.
    pub async fn list_by_breed(pool: &PgPool, breed: &str) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE breed = $1 ORDER BY name, id");
        sqlx::query_as::<_, Dog>(&query)
            .bind(breed)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. `created_at` is never touched.
    ///
    /// `NOT NULL` columns use `COALESCE` so an absent value keeps the row's
    /// value. Nullable columns bind a "provided" flag alongside the value so
    /// that an explicit `null` clears the column while an omitted field
    /// leaves it alone. An update with no fields returns the current row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDog,
    ) -> Result<Option<Dog>, sqlx::Error> {
        if !input.has_changes() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE dogs SET \
                 name        = COALESCE($2, name), \
                 breed       = COALESCE($3, breed), \
                 description = CASE WHEN $4 THEN $5 ELSE description END, \
                 logo_url    = CASE WHEN $6 THEN $7 ELSE logo_url END, \
                 photo_url   = CASE WHEN $8 THEN $9 ELSE photo_url END, \
                 age         = CASE WHEN $10 THEN $11 ELSE age END, \
                 is_featured = COALESCE($12, is_featured) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .bind(input.name.value().map(String::as_str))
            .bind(input.breed.value().map(String::as_str))
            .bind(input.description.is_specified())
            .bind(input.description.value().map(String::as_str))
            .bind(input.logo_url.is_specified())
            .bind(input.logo_url.value().map(String::as_str))
            .bind(input.photo_url.is_specified())
            .bind(input.photo_url.value().map(String::as_str))
            .bind(input.age.is_specified())
            .bind(input.age.value().copied())
            .bind(input.is_featured.value().copied())
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a dog by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
