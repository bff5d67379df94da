//! resview - resource normalization for cluster applications and user groups
//!
//! Raw API records ([`models::raw`]) are turned into fully populated view
//! models ([`models::view`]) by two pure mappers:
//!
//! - [`make_app`] derives identity, launch and SSO URLs, the endpoint
//!   address and a guessed icon for an application
//! - [`make_user_group`] defaults a user group's collections
//!
//! URL building is delegated to an [`AppRoutes`] implementation, normally
//! [`config::Config`].

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use error::{Error, Result};
pub use models::view::{
    App, AppId, AppRoutes, GuessedAppType, LaunchParams, UserGroup, make_app, make_user_group,
};
