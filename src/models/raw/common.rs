//! Shared raw types and serde helpers

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Key/value label attached to a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceLabel {
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub name: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub value: String,
}

impl ResourceLabel {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for ResourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// Deserialize a field leniently: `null` or a value of the wrong type
/// becomes `T::default()`.
///
/// Pair with `#[serde(default)]` so that a missing key behaves the same as
/// an explicit `null`.
pub fn default_on_invalid<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }

    Ok(T::deserialize(value).unwrap_or_else(|err| {
        log::trace!("Defaulting malformed field: {}", err);
        T::default()
    }))
}
