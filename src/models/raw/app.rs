//! Raw application records

use serde::{Deserialize, Serialize};

use super::common::{ResourceLabel, default_on_invalid};

/// Application record as returned by the cluster API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawApp {
    /// Application name, unique within a cluster
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub name: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub description: String,

    /// Internal address the application is served from
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub uri: String,

    /// Public address the proxy exposes the application on
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub public_addr: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub cluster_id: String,

    /// Fully qualified domain name used by the launcher
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub fqdn: String,

    /// Whether this is the AWS management console
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub aws_console: bool,

    /// Whether this is a SAML service provider
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub saml_app: bool,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub friendly_name: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub labels: Vec<ResourceLabel>,

    /// AWS IAM roles the user may assume (AWS console apps only)
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub aws_roles: Vec<AwsRole>,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub user_groups: Vec<UserGroupAndDescription>,
}

/// AWS IAM role available when launching an AWS console app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsRole {
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub name: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub arn: String,

    /// Human readable role name
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub display: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub account_id: String,
}

/// User group reference embedded in an application record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupAndDescription {
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub name: String,

    #[serde(default, deserialize_with = "default_on_invalid")]
    pub description: String,
}
