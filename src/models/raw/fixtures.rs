//! Test fixtures and builders for raw resource records
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::models::raw::fixtures::*` in test modules.

#![allow(dead_code)]

use super::{
    ApplicationAndFriendlyName, AwsRole, RawApp, RawUserGroup, ResourceLabel,
    UserGroupAndDescription,
};

// ============================================================================
// RawAppBuilder
// ============================================================================

/// Builder for creating test RawApp instances.
///
/// Starts from an empty record; only the fields a test sets are populated.
///
/// # Example
/// ```ignore
/// let app = RawAppBuilder::new("grafana")
///     .cluster_id("root")
///     .public_addr("grafana.example.com")
///     .label("env", "prod")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RawAppBuilder {
    app: RawApp,
}

impl RawAppBuilder {
    /// Create a new builder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            app: RawApp {
                name: name.into(),
                ..RawApp::default()
            },
        }
    }

    /// Create a builder for a launchable app: cluster, fqdn and public address set.
    pub fn launchable(name: impl Into<String>) -> Self {
        let name = name.into();
        let addr = format!("{}.teleport.example.com", name);
        Self::new(name)
            .cluster_id("root")
            .fqdn(addr.clone())
            .public_addr(addr)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.app.description = description.into();
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.app.uri = uri.into();
        self
    }

    pub fn public_addr(mut self, addr: impl Into<String>) -> Self {
        self.app.public_addr = addr.into();
        self
    }

    pub fn cluster_id(mut self, cluster_id: impl Into<String>) -> Self {
        self.app.cluster_id = cluster_id.into();
        self
    }

    pub fn fqdn(mut self, fqdn: impl Into<String>) -> Self {
        self.app.fqdn = fqdn.into();
        self
    }

    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.app.friendly_name = friendly_name.into();
        self
    }

    /// Mark as the AWS management console.
    pub fn aws_console(mut self) -> Self {
        self.app.aws_console = true;
        self
    }

    /// Mark as a SAML service provider.
    pub fn saml(mut self) -> Self {
        self.app.saml_app = true;
        self
    }

    /// Append a label.
    pub fn label(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.app.labels.push(ResourceLabel::new(name, value));
        self
    }

    /// Append an AWS role with matching name and display.
    pub fn aws_role(mut self, name: impl Into<String>, arn: impl Into<String>) -> Self {
        let name = name.into();
        self.app.aws_roles.push(AwsRole {
            display: name.clone(),
            name,
            arn: arn.into(),
            account_id: String::new(),
        });
        self
    }

    /// Append a user group reference.
    pub fn user_group(mut self, name: impl Into<String>) -> Self {
        self.app.user_groups.push(UserGroupAndDescription {
            name: name.into(),
            description: String::new(),
        });
        self
    }

    /// Build the RawApp.
    pub fn build(self) -> RawApp {
        self.app
    }
}

// ============================================================================
// RawUserGroupBuilder
// ============================================================================

/// Builder for creating test RawUserGroup instances.
#[derive(Debug, Clone, Default)]
pub struct RawUserGroupBuilder {
    group: RawUserGroup,
}

impl RawUserGroupBuilder {
    /// Create a new builder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: RawUserGroup {
                name: name.into(),
                ..RawUserGroup::default()
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.group.description = description.into();
        self
    }

    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.group.friendly_name = friendly_name.into();
        self
    }

    pub fn label(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.group.labels.push(ResourceLabel::new(name, value));
        self
    }

    pub fn application(mut self, name: impl Into<String>, friendly_name: impl Into<String>) -> Self {
        self.group.applications.push(ApplicationAndFriendlyName {
            name: name.into(),
            friendly_name: friendly_name.into(),
        });
        self
    }

    /// Build the RawUserGroup.
    pub fn build(self) -> RawUserGroup {
        self.group
    }
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Create a minimal test app with just a name.
pub fn test_app(name: &str) -> RawApp {
    RawAppBuilder::new(name).build()
}

/// Create a minimal test user group with just a name.
pub fn test_user_group(name: &str) -> RawUserGroup {
    RawUserGroupBuilder::new(name).build()
}
