//! Configuration commands

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Run the config show command to display the resolved configuration
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let config = opts.load_config()?;

    if opts.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}\n", "resview Configuration".bold());

    if path.exists() {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    let base_url_source = if opts.base_url.is_some() {
        " (via --base-url)".dimmed().to_string()
    } else {
        String::new()
    };

    println!("Base URL: {}{}", config.base_url.bold(), base_url_source);
    println!("App launcher route: {}", config.routes.app_launcher);

    Ok(())
}

/// Run the config init command to write a default configuration file
pub fn init(opts: &GlobalOptions, force: bool) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;

    if path.exists() && !force {
        return Err(ConfigError::SaveError(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        ))
        .into());
    }

    let config = Config::default().with_base_url(opts.base_url_ref())?;
    config.save_to(&path)?;

    println!(
        "{} Wrote configuration to {}",
        "\u{2713}".green(),
        path.display()
    );

    Ok(())
}
