//! Raw resource records
//!
//! These are the loosely-typed records handed over by the transport layer.
//! Every field is optional on the wire; absent and `null` values are folded
//! into defaults while deserializing, so the mappers only ever see fully
//! populated structs.

mod app;
mod common;
mod user_group;

#[cfg(test)]
pub mod fixtures;

pub use app::{AwsRole, RawApp, UserGroupAndDescription};
pub use common::{ResourceLabel, default_on_invalid};
pub use user_group::{ApplicationAndFriendlyName, RawUserGroup};
