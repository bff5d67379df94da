//! Endpoint protocol detection

/// Protocol an application endpoint is reached over, derived from its `uri`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointProtocol {
    /// `tcp://` application
    Tcp,
    /// `cloud://` application (cloud provider console or API)
    Cloud,
    /// Neither of the above (`http://`, `https://`, empty or unrecognized);
    /// the proxy serves these over HTTPS
    Web,
}

impl EndpointProtocol {
    /// Classify by case-sensitive scheme prefix.
    pub fn from_uri(uri: &str) -> Self {
        if uri.starts_with("tcp://") {
            EndpointProtocol::Tcp
        } else if uri.starts_with("cloud://") {
            EndpointProtocol::Cloud
        } else {
            EndpointProtocol::Web
        }
    }

    pub fn scheme(self) -> &'static str {
        match self {
            EndpointProtocol::Tcp => "tcp://",
            EndpointProtocol::Cloud => "cloud://",
            EndpointProtocol::Web => "https://",
        }
    }

    pub fn is_cloud_or_tcp(self) -> bool {
        matches!(self, EndpointProtocol::Tcp | EndpointProtocol::Cloud)
    }

    /// Prefix `addr` with this protocol's scheme.
    pub fn qualify(self, addr: &str) -> String {
        format!("{}{}", self.scheme(), addr)
    }
}
