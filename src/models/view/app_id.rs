//! Application identity

use std::fmt;

use serde::{Serialize, Serializer};

/// Identity of an application: `(cluster_id, name, address)`.
///
/// `address` is the public address when one is set and the raw `uri`
/// otherwise. Equality and hashing are over the three components, so values
/// that contain `-` never collide with each other the way the joined string
/// form can.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppId {
    cluster_id: String,
    name: String,
    address: String,
}

impl AppId {
    pub fn new(cluster_id: &str, name: &str, public_addr: &str, uri: &str) -> Self {
        let address = if public_addr.is_empty() {
            uri
        } else {
            public_addr
        };

        Self {
            cluster_id: cluster_id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Public address, or the raw uri when the app has no public address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Renders `{cluster_id}-{name}-{address}`. This form is for display and
/// row keys only; it is not injective.
impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.cluster_id, self.name, self.address)
    }
}

impl Serialize for AppId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
