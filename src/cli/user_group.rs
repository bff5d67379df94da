//! User group commands

use crate::cli::args::{GlobalOptions, InputArgs};
use crate::cli::input;
use crate::error::Result;
use crate::models::raw::RawUserGroup;
use crate::models::view::{UserGroup, make_user_groups};
use crate::output;

/// Run the user-group list command
pub fn list(opts: &GlobalOptions, args: &InputArgs) -> Result<()> {
    let raws = input::read_records::<RawUserGroup>(args)?;

    log::debug!("Normalizing {} user group records", raws.len());

    let groups: Vec<UserGroup> = make_user_groups(raws.into_iter().map(Option::unwrap_or_default));
    let groups = args.apply_limit(groups);

    output::print(groups.as_slice(), opts.format)
}
