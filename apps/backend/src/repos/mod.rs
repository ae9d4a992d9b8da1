//! Domain repositories over the SeaORM adapters.

pub mod categories;
pub mod questions;
