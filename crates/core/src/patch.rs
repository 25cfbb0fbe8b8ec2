//! Three-state field type for partial updates.
//!
//! A JSON body distinguishes a key that is absent from a key that is
//! present with `null`. [`Patch`] keeps both apart so a partial update can
//! leave a column untouched, clear it, or overwrite it.
//!
//! Struct fields of type `Patch<T>` must carry `#[serde(default)]` (or the
//! struct must); serde never calls the deserializer for a missing key, so
//! the default supplies [`Patch::Unspecified`].

use serde::{Deserialize, Deserializer};

/// A field in a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was absent: keep the stored value.
    #[default]
    Unspecified,
    /// The key was present with `null`: clear the stored value.
    Null,
    /// The key was present with a value: overwrite the stored value.
    Value(T),
}

impl<T> Patch<T> {
    /// Whether the caller said anything about this field.
    pub fn is_specified(&self) -> bool {
        !matches!(self, Patch::Unspecified)
    }

    /// The new value, if one was given. `Null` and `Unspecified` both yield `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
