//! Display model implementations for table, pretty and JSON output
//!
//! Display models flatten view models into CLI-friendly rows with
//! appropriate column names. JSON output serializes the view models
//! themselves so no field is lost.

mod app;
mod common;
mod user_group;

pub use app::AppDisplay;
pub use common::{format_labels, or_dash};
pub use user_group::UserGroupDisplay;
