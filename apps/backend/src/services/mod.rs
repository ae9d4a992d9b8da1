//! Services: domain operations composed from repos, HTTP-agnostic.

pub mod categories;
pub mod questions;
pub mod quiz;
