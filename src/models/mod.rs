//! Resource models
//!
//! - [`raw`]: records as handed over by the transport, null-tolerant
//! - [`view`]: normalized view models and the mappers that build them
//! - [`display`]: rows for table and pretty CLI output

pub mod display;
pub mod raw;
pub mod view;

pub use display::{AppDisplay, UserGroupDisplay};
pub use raw::{RawApp, RawUserGroup, ResourceLabel};
pub use view::{
    App, AppId, AppRoutes, GuessedAppType, LaunchParams, UserGroup, make_app, make_user_group,
};
