//! Application commands

use crate::cli::args::{GlobalOptions, InputArgs};
use crate::cli::input;
use crate::error::Result;
use crate::models::raw::RawApp;
use crate::models::view::{App, GuessedAppType, make_apps};
use crate::output;

/// Run the app list command
pub fn list(opts: &GlobalOptions, args: &InputArgs, icon: Option<GuessedAppType>) -> Result<()> {
    let config = opts.load_config()?;
    let raws = input::read_records::<RawApp>(args)?;

    log::debug!(
        "Normalizing {} application records against {}",
        raws.len(),
        config.base_url
    );

    let apps: Vec<App> = make_apps(raws, &config)
        .into_iter()
        .filter(|app| icon.is_none_or(|icon| app.guessed_app_icon_name() == icon))
        .collect();
    let apps = args.apply_limit(apps);

    output::print(apps.as_slice(), opts.format)
}
