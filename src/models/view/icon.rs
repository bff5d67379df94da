//! Application icon classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::raw::RawApp;

/// Icon shown for an application, guessed from its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessedAppType {
    Aws,
    Slack,
    Grafana,
    Jenkins,
    Application,
}

impl GuessedAppType {
    pub const ALL: [GuessedAppType; 5] = [
        GuessedAppType::Aws,
        GuessedAppType::Slack,
        GuessedAppType::Grafana,
        GuessedAppType::Jenkins,
        GuessedAppType::Application,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GuessedAppType::Aws => "Aws",
            GuessedAppType::Slack => "Slack",
            GuessedAppType::Grafana => "Grafana",
            GuessedAppType::Jenkins => "Jenkins",
            GuessedAppType::Application => "Application",
        }
    }
}

impl fmt::Display for GuessedAppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuessedAppType {
    type Err = String;

    /// Case-insensitive parse, used by the `--icon` filter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuessedAppType::ALL
            .into_iter()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = GuessedAppType::ALL.iter().map(|i| i.as_str()).collect();
                format!("unknown icon '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// A signal that can be read off a raw app record.
#[derive(Debug, Clone, Copy)]
enum Signal {
    /// The record is flagged as the AWS console
    AwsConsole,
    /// `name` or `friendly_name` contains the keyword (case-insensitive),
    /// or a label renders exactly as `icon:{keyword}`
    Keyword(&'static str),
}

impl Signal {
    fn matches(self, app: &RawApp) -> bool {
        match self {
            Signal::AwsConsole => app.aws_console,
            Signal::Keyword(keyword) => {
                contains_ignore_case(&app.name, keyword)
                    || contains_ignore_case(&app.friendly_name, keyword)
                    // `{name}:{value}` == `icon:{keyword}` only when neither
                    // side carries its own colon, so compare the parts.
                    || app
                        .labels
                        .iter()
                        .any(|label| label.name == "icon" && label.value == keyword)
            }
        }
    }
}

/// Classification rules in priority order. First match wins.
const ICON_RULES: [(Signal, GuessedAppType); 4] = [
    (Signal::AwsConsole, GuessedAppType::Aws),
    (Signal::Keyword("slack"), GuessedAppType::Slack),
    (Signal::Keyword("grafana"), GuessedAppType::Grafana),
    (Signal::Keyword("jenkins"), GuessedAppType::Jenkins),
];

/// Guess the icon for an app record, falling back to `Application`.
pub fn guess_app_icon(app: &RawApp) -> GuessedAppType {
    let icon = ICON_RULES
        .iter()
        .find(|(signal, _)| signal.matches(app))
        .map(|(_, icon)| *icon)
        .unwrap_or(GuessedAppType::Application);

    log::trace!("app {:?} classified as {}", app.name, icon);
    icon
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw::fixtures::RawAppBuilder;

    #[test]
    fn test_default_is_application() {
        assert_eq!(guess_app_icon(&RawApp::default()), GuessedAppType::Application);
    }

    #[test]
    fn test_aws_console_wins_over_name() {
        let app = RawAppBuilder::new("slack-bot").aws_console().build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Aws);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let app = RawAppBuilder::new("Team-SLACK").build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Slack);
    }

    #[test]
    fn test_friendly_name_match() {
        let app = RawAppBuilder::new("ci")
            .friendly_name("Jenkins CI")
            .build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Jenkins);
    }

    #[test]
    fn test_icon_label_match() {
        let app = RawAppBuilder::new("").label("icon", "grafana").build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Grafana);
    }

    #[test]
    fn test_icon_label_value_is_case_sensitive() {
        let app = RawAppBuilder::new("dash").label("icon", "Grafana").build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Application);
    }

    #[test]
    fn test_label_with_embedded_colon_does_not_match() {
        let app = RawAppBuilder::new("dash").label("icon:grafana", "").build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Application);
    }

    #[test]
    fn test_other_label_keys_are_ignored() {
        let app = RawAppBuilder::new("dash").label("team", "grafana").build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Application);
    }

    #[test]
    fn test_priority_slack_before_grafana() {
        let app = RawAppBuilder::new("grafana")
            .label("icon", "slack")
            .build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Slack);
    }

    #[test]
    fn test_priority_grafana_before_jenkins() {
        let app = RawAppBuilder::new("jenkins-grafana").build();
        assert_eq!(guess_app_icon(&app), GuessedAppType::Grafana);
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("slack".parse::<GuessedAppType>(), Ok(GuessedAppType::Slack));
        assert_eq!("AWS".parse::<GuessedAppType>(), Ok(GuessedAppType::Aws));
        assert!("teams".parse::<GuessedAppType>().is_err());
    }

    #[test]
    fn test_serializes_as_variant_name() {
        let json = serde_json::to_string(&GuessedAppType::Jenkins).unwrap();
        assert_eq!(json, "\"Jenkins\"");
    }
}
