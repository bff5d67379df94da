//! User group view model

use serde::Serialize;

use crate::models::raw::{ApplicationAndFriendlyName, RawUserGroup, ResourceLabel};

/// Resource kind reported for user groups
pub const USER_GROUP_KIND: &str = "user_group";

/// Normalized user group, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    kind: &'static str,
    name: String,
    description: String,
    labels: Vec<ResourceLabel>,
    friendly_name: String,
    applications: Vec<ApplicationAndFriendlyName>,
}

impl From<RawUserGroup> for UserGroup {
    fn from(raw: RawUserGroup) -> Self {
        Self {
            kind: USER_GROUP_KIND,
            name: raw.name,
            description: raw.description,
            labels: raw.labels,
            friendly_name: raw.friendly_name,
            applications: raw.applications,
        }
    }
}

impl From<&RawUserGroup> for UserGroup {
    fn from(raw: &RawUserGroup) -> Self {
        UserGroup::from(raw.clone())
    }
}

/// Normalize a raw user group record.
pub fn make_user_group(raw: RawUserGroup) -> UserGroup {
    UserGroup::from(raw)
}

/// Normalize a batch of records, preserving order.
pub fn make_user_groups<I>(raws: I) -> Vec<UserGroup>
where
    I: IntoIterator<Item = RawUserGroup>,
{
    raws.into_iter().map(UserGroup::from).collect()
}

impl UserGroup {
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn labels(&self) -> &[ResourceLabel] {
        &self.labels
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn applications(&self) -> &[ApplicationAndFriendlyName] {
        &self.applications
    }
}
