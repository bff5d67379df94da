//! Configuration management for resview
//!
//! The configuration supplies the two URL collaborators the application
//! mapper needs: the deployment base URL and the launcher route template.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::models::view::{AppRoutes, LaunchParams};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://localhost:3080";

/// Launcher route used when none is configured
pub const DEFAULT_APP_LAUNCHER_ROUTE: &str = "/web/launch/:fqdn/:clusterId?/:publicAddr?/:arn?";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root URL of the deployment, e.g. `https://teleport.example.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Route templates
    #[serde(default)]
    pub routes: Routes,
}

/// Route templates.
///
/// Segments of the form `:name` are replaced with parameter values. A
/// trailing `?` marks the segment optional: it is dropped when the parameter
/// is unknown or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routes {
    /// Application launcher, parameters `fqdn`, `clusterId`, `publicAddr`
    #[serde(default = "default_app_launcher")]
    pub app_launcher: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_app_launcher() -> String {
    DEFAULT_APP_LAUNCHER_ROUTE.to_string()
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            app_launcher: default_app_launcher(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            routes: Routes::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".resview").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file at the default location yields the built-in defaults;
    /// a missing file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    log::debug!(
                        "No config at {}, using defaults",
                        default.display()
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        log::debug!("Loading config from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str::<Config>(&contents)
            .map_err(ConfigError::from)?
            .normalized();
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to an explicit path, or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<PathBuf> {
        let path = Self::resolve_path(path)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Replace the base URL, e.g. from `--base-url`
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Result<Self> {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
            self = self.normalized();
            self.validate()?;
        }

        Ok(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let host = self
            .base_url
            .strip_prefix("https://")
            .or_else(|| self.base_url.strip_prefix("http://"))
            .and_then(|rest| rest.split('/').next())
            .unwrap_or_default();

        if host.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "base_url must be an http:// or https:// URL with a host, got '{}'",
                self.base_url
            ))
            .into());
        }

        if !self.routes.app_launcher.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "routes.app_launcher must start with '/', got '{}'",
                self.routes.app_launcher
            ))
            .into());
        }

        Ok(())
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }
}

impl AppRoutes for Config {
    fn app_launcher_route(&self, params: &LaunchParams<'_>) -> String {
        expand_route(&self.routes.app_launcher, |name| match name {
            "fqdn" => Some(params.fqdn),
            "clusterId" => Some(params.cluster_id),
            "publicAddr" => Some(params.public_addr),
            _ => None,
        })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Substitute `:name` segments of a route template.
///
/// Values are inserted verbatim. Unknown required segments are left as-is,
/// unknown optional segments are dropped.
fn expand_route<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut segments = Vec::new();

    for segment in template.split('/') {
        let Some(param) = segment.strip_prefix(':') else {
            segments.push(segment);
            continue;
        };

        let (name, optional) = match param.strip_suffix('?') {
            Some(name) => (name, true),
            None => (param, false),
        };

        match lookup(name).filter(|v| !v.is_empty()) {
            Some(value) => segments.push(value),
            None if optional => {}
            None => segments.push(segment),
        }
    }

    segments.join("/")
}
