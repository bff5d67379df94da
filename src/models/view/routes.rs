//! URL collaborators consumed by the application mapper

/// Inputs for building an application launcher route.
///
/// Only constructed when all three values are non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchParams<'a> {
    pub fqdn: &'a str,
    pub cluster_id: &'a str,
    pub public_addr: &'a str,
}

impl<'a> LaunchParams<'a> {
    /// Returns `None` unless `fqdn`, `cluster_id` and `public_addr` are all set.
    pub fn new(fqdn: &'a str, cluster_id: &'a str, public_addr: &'a str) -> Option<Self> {
        if fqdn.is_empty() || cluster_id.is_empty() || public_addr.is_empty() {
            return None;
        }

        Some(Self {
            fqdn,
            cluster_id,
            public_addr,
        })
    }
}

/// Routing collaborator supplied by the deployment configuration.
///
/// The routing scheme is opaque to the mappers: they only decide *whether*
/// a route is built and hand over the inputs.
pub trait AppRoutes {
    /// Build the route that launches an application.
    fn app_launcher_route(&self, params: &LaunchParams<'_>) -> String;

    /// Root URL of the deployment, without a trailing slash.
    fn base_url(&self) -> &str;
}
