//! DTOs for questions_sea adapter.

/// DTO for inserting a question. Values are already validated.
#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}
