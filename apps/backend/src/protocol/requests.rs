//! Request bodies and query strings.
//!
//! Numeric ids may arrive as JSON numbers or numeric strings (`3` or `"3"`);
//! the web client sends both.

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::services::questions::QuestionDraft;

/// `GET /questions?page=N`
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub page: Option<u64>,
}

/// Body of `POST /questions`, which either searches or creates.
///
/// A body carrying `searchTerm` is always a search.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsRequest {
    Search(SearchRequest),
    Create(CreateQuestionRequest),
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub page: Option<u64>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub difficulty: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub category: i64,
}

impl From<CreateQuestionRequest> for QuestionDraft {
    fn from(req: CreateQuestionRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
            difficulty: req.difficulty,
            category: req.category,
        }
    }
}

/// Body of `POST /quizzes`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// `0` selects every category.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}
