//! Application display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{format_labels, or_dash};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::view::App;
use crate::output::pretty::{PrettyPrint, format_pretty};
use crate::output::{Formattable, json, table};

/// Application display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppDisplay {
    /// Friendly name, or the app name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Guessed icon
    #[tabled(rename = "TYPE")]
    pub icon: String,

    /// Protocol-qualified address
    #[tabled(rename = "ADDRESS")]
    pub address: String,

    #[tabled(rename = "CLUSTER")]
    pub cluster: String,

    /// Whether the app can be launched from the web UI
    #[tabled(rename = "LAUNCH")]
    pub launch: String,

    #[tabled(rename = "LABELS")]
    pub labels: String,
}

impl From<&App> for AppDisplay {
    fn from(app: &App) -> Self {
        Self {
            name: app.display_name().to_string(),
            icon: app.guessed_app_icon_name().to_string(),
            address: or_dash(app.addr_with_protocol()),
            cluster: or_dash(app.cluster_id()),
            launch: if app.launch_url().is_empty() {
                "".to_string()
            } else {
                "\u{2713}".to_string() // checkmark
            },
            labels: format_labels(app.labels()),
        }
    }
}

impl From<App> for AppDisplay {
    fn from(app: App) -> Self {
        AppDisplay::from(&app)
    }
}

impl PrettyPrint for App {
    fn pretty(&self) -> String {
        let mut lines = Vec::new();

        let mut header = self.display_name().bold().to_string();
        if !self.friendly_name().is_empty() && self.friendly_name() != self.name() {
            header.push_str(&format!(" ({})", self.name().dimmed()));
        }
        header.push_str(&format!("  [{}]", self.guessed_app_icon_name().to_string().cyan()));
        lines.push(header);

        if !self.description().is_empty() {
            lines.push(format!("  {}", self.description().dimmed()));
        }

        lines.push(format!("  ID:       {}", self.id()));
        lines.push(format!("  Address:  {}", or_dash(self.addr_with_protocol())));
        lines.push(format!("  Cluster:  {}", or_dash(self.cluster_id())));

        if !self.launch_url().is_empty() {
            lines.push(format!("  Launch:   {}", self.launch_url().green()));
        }
        if !self.saml_app_sso_url().is_empty() {
            lines.push(format!("  SAML SSO: {}", self.saml_app_sso_url().green()));
        }
        if !self.aws_roles().is_empty() {
            let roles: Vec<&str> = self.aws_roles().iter().map(|r| r.display.as_str()).collect();
            lines.push(format!("  AWS roles: {}", roles.join(", ")));
        }
        if !self.user_groups().is_empty() {
            let groups: Vec<&str> = self.user_groups().iter().map(|g| g.name.as_str()).collect();
            lines.push(format!("  Groups:   {}", groups.join(", ")));
        }

        lines.push(format!("  Labels:   {}", format_labels(self.labels())));

        lines.join("\n")
    }
}

impl Formattable for [App] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        let output = match format {
            OutputFormat::Table => {
                let rows: Vec<AppDisplay> = self.iter().map(AppDisplay::from).collect();
                table::format_table(&rows)
            }
            OutputFormat::Json => json::format_json(self)?,
            OutputFormat::Pretty => format_pretty(self),
        };

        Ok(output)
    }
}
