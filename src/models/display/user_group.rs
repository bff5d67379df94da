//! User group display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{format_labels, or_dash};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::view::UserGroup;
use crate::output::pretty::{PrettyPrint, format_pretty};
use crate::output::{Formattable, json, table};

/// User group display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserGroupDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "FRIENDLY NAME")]
    pub friendly_name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    /// Number of applications the group grants access to
    #[tabled(rename = "APPS")]
    pub apps: usize,

    #[tabled(rename = "LABELS")]
    pub labels: String,
}

impl From<&UserGroup> for UserGroupDisplay {
    fn from(group: &UserGroup) -> Self {
        Self {
            name: group.name().to_string(),
            friendly_name: or_dash(group.friendly_name()),
            description: or_dash(group.description()),
            apps: group.applications().len(),
            labels: format_labels(group.labels()),
        }
    }
}

impl From<UserGroup> for UserGroupDisplay {
    fn from(group: UserGroup) -> Self {
        UserGroupDisplay::from(&group)
    }
}

impl PrettyPrint for UserGroup {
    fn pretty(&self) -> String {
        let mut lines = vec![self.name().bold().to_string()];

        if !self.friendly_name().is_empty() {
            lines.push(format!("  Name:   {}", self.friendly_name()));
        }
        if !self.description().is_empty() {
            lines.push(format!("  {}", self.description().dimmed()));
        }

        lines.push(format!("  Labels: {}", format_labels(self.labels())));

        if self.applications().is_empty() {
            lines.push(format!("  Apps:   {}", "none".dimmed()));
        } else {
            lines.push("  Apps:".to_string());
            for app in self.applications() {
                if app.friendly_name.is_empty() {
                    lines.push(format!("    - {}", app.name));
                } else {
                    lines.push(format!("    - {} ({})", app.friendly_name, app.name));
                }
            }
        }

        lines.join("\n")
    }
}

impl Formattable for [UserGroup] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        let output = match format {
            OutputFormat::Table => {
                let rows: Vec<UserGroupDisplay> = self.iter().map(UserGroupDisplay::from).collect();
                table::format_table(&rows)
            }
            OutputFormat::Json => json::format_json(self)?,
            OutputFormat::Pretty => format_pretty(self),
        };

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw::fixtures::{RawUserGroupBuilder, test_user_group};
    use crate::models::view::make_user_group;

    #[test]
    fn test_user_group_display() {
        let group = make_user_group(
            RawUserGroupBuilder::new("okta-admins")
                .friendly_name("Admins")
                .application("a", "")
                .application("b", "")
                .build(),
        );

        let display = UserGroupDisplay::from(&group);

        assert_eq!(display.name, "okta-admins");
        assert_eq!(display.friendly_name, "Admins");
        assert_eq!(display.description, "--");
        assert_eq!(display.apps, 2);
        assert_eq!(display.labels, "--");
    }

    #[test]
    fn test_pretty_lists_applications() {
        let group = make_user_group(
            RawUserGroupBuilder::new("g")
                .application("okta-app", "Okta App")
                .application("bare", "")
                .build(),
        );
        let pretty = group.pretty();

        assert!(pretty.contains("- Okta App (okta-app)"));
        assert!(pretty.contains("- bare"));
    }

    #[test]
    fn test_pretty_without_applications() {
        let pretty = make_user_group(test_user_group("g")).pretty();
        assert!(pretty.contains("none"));
    }

    #[test]
    fn test_format_json_keeps_empty_collections() {
        let groups = vec![make_user_group(test_user_group("g"))];
        let json = groups.format(OutputFormat::Json).unwrap();

        assert!(json.contains("\"labels\": []"));
        assert!(json.contains("\"applications\": []"));
    }
}
