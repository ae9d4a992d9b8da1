//! Domain layer: pure pagination and quiz selection logic.

pub mod pagination;
pub mod quiz;

#[cfg(test)]
mod test_prelude;

pub use pagination::{paginate, PageRequest};
pub use quiz::{CandidateSet, QuizDraw};
