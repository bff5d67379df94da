//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod app;
pub mod args;
pub mod config;
pub mod input;
pub mod user_group;

pub use args::{GlobalOptions, InputArgs, OutputFormat};

use crate::models::view::GuessedAppType;

/// resview - normalize cluster application and user group records
#[derive(Parser, Debug)]
#[command(name = "resview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "RESVIEW_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "RESVIEW_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the deployment base URL used for SSO links
    #[arg(long, global = true, env = "RESVIEW_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "RESVIEW_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize application records
    #[command(subcommand)]
    App(AppCommands),

    /// Normalize user group records
    #[command(subcommand)]
    UserGroup(UserGroupCommands),

    /// Inspect or create configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Display version information
    Version,
}

/// Application subcommands
#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// Normalize and list application records
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            resview app list -i apps.json                # Table of apps\n  \
            resview app list -i apps.json --icon slack   # Only Slack apps\n  \
            curl -s $API/apps | resview app list --format json"
    )]
    List {
        #[command(flatten)]
        input: InputArgs,

        /// Only show apps with this guessed icon (aws, slack, grafana, jenkins, application)
        #[arg(long)]
        icon: Option<GuessedAppType>,
    },
}

/// User group subcommands
#[derive(Subcommand, Debug)]
pub enum UserGroupCommands {
    /// Normalize and list user group records
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
