//! Database infrastructure - connection management and migrations.

pub mod core;

pub use crate::config::db::{DbKind, DbOwner, RuntimeEnv};
