//! Question repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::questions_sea as questions_adapter;
use crate::entities::questions;
use crate::errors::domain::DomainError;

/// Question domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            difficulty: model.difficulty,
            category: model.category,
        }
    }
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

fn into_domain(models: Vec<questions::Model>) -> Vec<Question> {
    models.into_iter().map(Question::from).collect()
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(questions_adapter::count_all(conn).await?)
}

pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<Question>, DomainError> {
    let models = questions_adapter::list_page(conn, offset, limit).await?;
    Ok(into_domain(models))
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Question>, DomainError> {
    let model = questions_adapter::find_by_id(conn, id).await?;
    Ok(model.map(Question::from))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewQuestion,
) -> Result<Question, DomainError> {
    let dto = questions_adapter::QuestionCreate {
        question: new.question,
        answer: new.answer,
        difficulty: new.difficulty,
        category: new.category,
    };
    let model = questions_adapter::create_question(conn, dto).await?;
    Ok(Question::from(model))
}

/// Delete a question; `NotFound` (and no change) when the id does not exist.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    match questions_adapter::delete_by_id(conn, id).await? {
        0 => Err(DomainError::question_not_found(id)),
        _ => Ok(()),
    }
}

pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<Question>, DomainError> {
    let models = questions_adapter::search_text(conn, term).await?;
    Ok(into_domain(models))
}

/// Questions in `category`. Does not check that the category exists.
pub async fn by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: i64,
) -> Result<Vec<Question>, DomainError> {
    let models = questions_adapter::list_by_category(conn, category).await?;
    Ok(into_domain(models))
}

/// Ids of every question, restricted to `category` when given.
pub async fn ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: Option<i64>,
) -> Result<Vec<i64>, DomainError> {
    Ok(questions_adapter::list_ids(conn, category).await?)
}
