//! Field rules for dog profiles.
//!
//! Handlers call these before touching the database so that a malformed
//! input is rejected as a whole and never partially applied.

use serde::Deserialize;
use validator::{Validate, ValidateUrl};

use crate::error::CoreError;
use crate::patch::Patch;

/// Default page size carried by [`DogFilter`].
pub const DEFAULT_FILTER_LIMIT: i64 = 20;

/// Validate a text field that must be present and non-empty (`name`, `breed`).
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate an optional URL field (`logo_url`, `photo_url`).
///
/// `None` is accepted; a present value must parse as an absolute URL.
pub fn validate_url(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(url) if !url.validate_url() => Err(CoreError::Validation(format!(
            "{field} must be a valid URL"
        ))),
        _ => Ok(()),
    }
}

/// Validate an optional age. A present age must be a positive integer.
pub fn validate_age(age: Option<i32>) -> Result<(), CoreError> {
    match age {
        Some(years) if years <= 0 => Err(CoreError::Validation(
            "age must be a positive integer".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Validate a patch for a column that is `NOT NULL` in the store.
///
/// Omitting the field is fine, clearing it is not.
pub fn validate_required_patch<T>(
    field: &str,
    patch: &Patch<T>,
    check: impl FnOnce(&T) -> Result<(), CoreError>,
) -> Result<(), CoreError> {
    match patch {
        Patch::Unspecified => Ok(()),
        Patch::Null => Err(CoreError::Validation(format!("{field} cannot be null"))),
        Patch::Value(v) => check(v),
    }
}

/// Validate a patch for a URL column. `Null` clears it and is always allowed.
pub fn validate_url_patch(field: &str, patch: &Patch<String>) -> Result<(), CoreError> {
    validate_url(field, patch.value().map(String::as_str))
}

/// Validate a patch for the age column. `Null` clears it and is always allowed.
pub fn validate_age_patch(patch: &Patch<i32>) -> Result<(), CoreError> {
    validate_age(patch.value().copied())
}

/// Filter input for dog listings.
///
/// Accepted and validated at the boundary, but no listing query applies
/// it; see DESIGN.md for the rationale.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DogFilter {
    pub breed: Option<String>,
    pub is_featured: Option<bool>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: i64,
    #[serde(default)]
    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_FILTER_LIMIT
}

impl Default for DogFilter {
    fn default() -> Self {
        Self {
            breed: None,
            is_featured: None,
            limit: DEFAULT_FILTER_LIMIT,
            offset: 0,
        }
    }
}

impl DogFilter {
    /// Run the range checks, mapping failures into [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- required text ------------------------------------------------------

    #[test]
    fn empty_name_rejected() {
        assert_matches!(
            validate_required_text("name", ""),
            Err(CoreError::Validation(msg)) if msg == "name is required"
        );
    }

    #[test]
    fn non_empty_name_accepted() {
        assert!(validate_required_text("name", "Buddy").is_ok());
    }

    // -- urls ---------------------------------------------------------------

    #[test]
    fn absent_url_accepted() {
        assert!(validate_url("logo_url", None).is_ok());
    }

    #[test]
    fn well_formed_url_accepted() {
        assert!(validate_url("photo_url", Some("https://images.example.com/buddy.jpg")).is_ok());
    }

    #[test]
    fn malformed_url_rejected() {
        assert_matches!(
            validate_url("logo_url", Some("not a url")),
            Err(CoreError::Validation(msg)) if msg.contains("logo_url")
        );
    }

    // -- age ----------------------------------------------------------------

    #[test]
    fn zero_and_negative_age_rejected() {
        assert!(validate_age(Some(0)).is_err());
        assert!(validate_age(Some(-3)).is_err());
    }

    #[test]
    fn positive_or_absent_age_accepted() {
        assert!(validate_age(Some(1)).is_ok());
        assert!(validate_age(None).is_ok());
    }

    // -- patches ------------------------------------------------------------

    #[test]
    fn required_patch_rejects_null() {
        let patch: Patch<String> = Patch::Null;
        assert_matches!(
            validate_required_patch("breed", &patch, |v| validate_required_text("breed", v)),
            Err(CoreError::Validation(msg)) if msg == "breed cannot be null"
        );
    }

    #[test]
    fn required_patch_checks_value() {
        let patch = Patch::Value(String::new());
        assert!(
            validate_required_patch("name", &patch, |v| validate_required_text("name", v))
                .is_err()
        );
    }

    #[test]
    fn required_patch_allows_omission() {
        let patch: Patch<String> = Patch::Unspecified;
        assert!(
            validate_required_patch("name", &patch, |v| validate_required_text("name", v)).is_ok()
        );
    }

    #[test]
    fn nullable_patches_allow_clearing() {
        assert!(validate_url_patch("logo_url", &Patch::Null).is_ok());
        assert!(validate_age_patch(&Patch::Null).is_ok());
    }

    #[test]
    fn nullable_patches_check_values() {
        assert!(validate_url_patch("logo_url", &Patch::Value("nope".to_string())).is_err());
        assert!(validate_age_patch(&Patch::Value(0)).is_err());
        assert!(validate_age_patch(&Patch::Value(5)).is_ok());
    }

    // -- filter -------------------------------------------------------------

    #[test]
    fn filter_defaults_applied() {
        let filter: DogFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.limit, DEFAULT_FILTER_LIMIT);
        assert_eq!(filter.offset, 0);
        assert!(filter.breed.is_none());
        assert!(filter.check().is_ok());
    }

    #[test]
    fn filter_rejects_non_positive_limit() {
        let filter = DogFilter {
            limit: 0,
            ..DogFilter::default()
        };
        assert_matches!(filter.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn filter_rejects_negative_offset() {
        let filter = DogFilter {
            offset: -1,
            ..DogFilter::default()
        };
        assert!(filter.check().is_err());
    }
}
