pub mod categories_sea;
