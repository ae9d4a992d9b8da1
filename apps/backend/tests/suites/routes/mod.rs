pub mod questions;
pub mod quizzes;
