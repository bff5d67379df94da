//! View models and the mappers that build them
//!
//! Each mapper is a pure function from a raw record to a fully populated
//! view model. Nothing here performs I/O or holds state, so the mappers can
//! be run over any number of records from any thread.

mod app;
mod app_id;
mod endpoint;
mod icon;
mod routes;
mod user_group;

pub use app::{App, make_app, make_apps};
pub use app_id::AppId;
pub use endpoint::EndpointProtocol;
pub use icon::{GuessedAppType, guess_app_icon};
pub use routes::{AppRoutes, LaunchParams};
pub use user_group::{UserGroup, make_user_group, make_user_groups};
