//! Success payloads. Every one carries `success: true`; failures are
//! rendered by `AppError`.

use serde::Serialize;

use crate::repos::questions::Question;
use crate::services::categories::CategoryMap;

/// `currentCategory` of listings that are not filtered by category.
pub const ALL_CATEGORIES_LABEL: &str = "All";

#[derive(Debug, Clone, Serialize)]
pub struct QuestionPayload {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

impl From<Question> for QuestionPayload {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

fn payloads(questions: Vec<Question>) -> Vec<QuestionPayload> {
    questions.into_iter().map(QuestionPayload::from).collect()
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl CategoriesResponse {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

/// `GET /questions` and search results.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionPayload>,
    pub total_questions: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<Question>, total_questions: u64, current_category: impl Into<String>) -> Self {
        Self {
            success: true,
            questions: payloads(questions),
            total_questions,
            categories: None,
            current_category: current_category.into(),
        }
    }

    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = Some(categories);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub id: i64,
    pub total_questions: u64,
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub id: i64,
    pub question: QuestionPayload,
}

impl From<Question> for CreateQuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            success: true,
            id: q.id,
            question: q.into(),
        }
    }
}

/// `question` is `null` once the quiz is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionPayload>,
}

impl QuizResponse {
    pub fn new(question: Option<Question>) -> Self {
        Self {
            success: true,
            question: question.map(QuestionPayload::from),
        }
    }
}
