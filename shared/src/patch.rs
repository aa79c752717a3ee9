//! Partial update field
//!
//! A field of an update payload is either left alone or set to a new value.
//! Absence in the JSON body and an explicit value are never conflated:
//!
//! ```
//! use shared::Patch;
//!
//! let keep: Patch<String> = Patch::Omitted;
//! assert_eq!(keep.merge("Ana".to_string()), "Ana");
//!
//! // Clearing an optional field is a `Set(None)`, not an omission
//! let clear: Patch<Option<i64>> = Patch::Set(None);
//! assert_eq!(clear.merge(Some(90_000)), None);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One field of a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Not mentioned in the request; the stored value is kept
    #[default]
    Omitted,
    /// Explicitly provided
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, Patch::Omitted)
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Omitted => Patch::Omitted,
            Patch::Set(v) => Patch::Set(v),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Omitted => None,
            Patch::Set(v) => Some(v),
        }
    }

    /// Apply this patch on top of the current value
    pub fn merge(self, current: T) -> T {
        match self {
            Patch::Omitted => current,
            Patch::Set(v) => v,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Callers pair this with `skip_serializing_if = "Patch::is_omitted"`
            Patch::Omitted => serializer.serialize_none(),
            Patch::Set(v) => v.serialize(serializer),
        }
    }
}

/// A present key always yields `Set`, including an explicit `null`.
///
/// Missing keys are handled by `#[serde(default)]` on the field.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

/// For required text fields: `null` is treated the same as an omitted key.
pub fn deserialize_required<'de, D>(deserializer: D) -> Result<Patch<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<String>::deserialize(deserializer)? {
        Some(v) => Patch::Set(v),
        None => Patch::Omitted,
    })
}
