//! Application view model

use serde::Serialize;

use super::app_id::AppId;
use super::endpoint::EndpointProtocol;
use super::icon::{GuessedAppType, guess_app_icon};
use super::routes::{AppRoutes, LaunchParams};
use crate::models::raw::{AwsRole, RawApp, ResourceLabel, UserGroupAndDescription};

/// Resource kind reported for applications
pub const APP_KIND: &str = "app";

/// Normalized application, ready for rendering.
///
/// Built only through [`make_app`]; derived fields stay consistent with the
/// record they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    kind: &'static str,
    id: AppId,
    name: String,
    description: String,
    uri: String,
    public_addr: String,
    labels: Vec<ResourceLabel>,
    cluster_id: String,
    fqdn: String,
    launch_url: String,
    aws_roles: Vec<AwsRole>,
    aws_console: bool,
    is_cloud_or_tcp_endpoint: bool,
    guessed_app_icon_name: GuessedAppType,
    addr_with_protocol: String,
    friendly_name: String,
    user_groups: Vec<UserGroupAndDescription>,
    saml_app: bool,
    saml_app_sso_url: String,
}

/// Normalize a raw application record.
///
/// A missing record is treated as an empty one. Never fails: every absent
/// field has already been defaulted by [`RawApp`]'s deserializer.
pub fn make_app<R>(raw: Option<RawApp>, routes: &R) -> App
where
    R: AppRoutes + ?Sized,
{
    let raw = raw.unwrap_or_default();

    let launch_url = LaunchParams::new(&raw.fqdn, &raw.cluster_id, &raw.public_addr)
        .map(|params| routes.app_launcher_route(&params))
        .unwrap_or_default();

    let id = AppId::new(&raw.cluster_id, &raw.name, &raw.public_addr, &raw.uri);

    let protocol = EndpointProtocol::from_uri(&raw.uri);
    let addr_with_protocol = if raw.public_addr.is_empty() {
        raw.uri.clone()
    } else {
        protocol.qualify(&raw.public_addr)
    };

    let saml_app_sso_url = if raw.saml_app {
        format!(
            "{}/enterprise/saml-idp/login/{}",
            routes.base_url(),
            raw.name
        )
    } else {
        String::new()
    };

    let guessed_app_icon_name = guess_app_icon(&raw);

    App {
        kind: APP_KIND,
        id,
        name: raw.name,
        description: raw.description,
        uri: raw.uri,
        public_addr: raw.public_addr,
        labels: raw.labels,
        cluster_id: raw.cluster_id,
        fqdn: raw.fqdn,
        launch_url,
        aws_roles: raw.aws_roles,
        aws_console: raw.aws_console,
        is_cloud_or_tcp_endpoint: protocol.is_cloud_or_tcp(),
        guessed_app_icon_name,
        addr_with_protocol,
        friendly_name: raw.friendly_name,
        user_groups: raw.user_groups,
        saml_app: raw.saml_app,
        saml_app_sso_url,
    }
}

/// Normalize a batch of records, preserving order.
pub fn make_apps<I, R>(raws: I, routes: &R) -> Vec<App>
where
    I: IntoIterator<Item = Option<RawApp>>,
    R: AppRoutes + ?Sized,
{
    raws.into_iter().map(|raw| make_app(raw, routes)).collect()
}

impl App {
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn id(&self) -> &AppId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn public_addr(&self) -> &str {
        &self.public_addr
    }

    pub fn labels(&self) -> &[ResourceLabel] {
        &self.labels
    }

    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }

    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    /// Launcher route, empty unless fqdn, cluster and public address are all known.
    pub fn launch_url(&self) -> &str {
        &self.launch_url
    }

    pub fn aws_roles(&self) -> &[AwsRole] {
        &self.aws_roles
    }

    pub fn aws_console(&self) -> bool {
        self.aws_console
    }

    pub fn is_cloud_or_tcp_endpoint(&self) -> bool {
        self.is_cloud_or_tcp_endpoint
    }

    pub fn guessed_app_icon_name(&self) -> GuessedAppType {
        self.guessed_app_icon_name
    }

    pub fn addr_with_protocol(&self) -> &str {
        &self.addr_with_protocol
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn user_groups(&self) -> &[UserGroupAndDescription] {
        &self.user_groups
    }

    pub fn saml_app(&self) -> bool {
        self.saml_app
    }

    pub fn saml_app_sso_url(&self) -> &str {
        &self.saml_app_sso_url
    }

    /// Friendly name when set, otherwise the app name.
    pub fn display_name(&self) -> &str {
        if self.friendly_name.is_empty() {
            &self.name
        } else {
            &self.friendly_name
        }
    }
}
