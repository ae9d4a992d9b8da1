//! Wire shapes of the trivia API.

pub mod requests;
pub mod responses;
