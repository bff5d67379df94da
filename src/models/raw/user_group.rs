//! Raw user group records

use serde::{Deserialize, Serialize};

use super::common::{ResourceLabel, default_on_invalid};

/// User group record as returned by the cluster API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserGroup {
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub name: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub description: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub friendly_name: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub labels: Vec<ResourceLabel>,

    /// Applications this group grants access to
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub applications: Vec<ApplicationAndFriendlyName>,
}

/// Application reference embedded in a user group record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationAndFriendlyName {
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub name: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub friendly_name: String,
}
