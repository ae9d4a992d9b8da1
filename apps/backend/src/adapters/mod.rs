//! SeaORM adapters: thin query functions returning entity models and `DbErr`.

pub mod categories_sea;
pub mod questions_sea;
