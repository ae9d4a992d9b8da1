//! Question listing, search, filtering, creation and deletion.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::pagination::{paginate, PageRequest};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::categories::{self, Category};
use crate::repos::questions::{self, NewQuestion, Question};

pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

/// One page of questions plus the size of the full result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: u64,
}

/// Unvalidated input for a new question.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

/// Page `req` of all questions in insertion order.
pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    req: PageRequest,
) -> Result<QuestionPage, DomainError> {
    let total = questions::count_all(conn).await?;
    req.check_in_range(total)?;

    let questions = questions::list_page(conn, req.offset(), req.limit()).await?;
    Ok(QuestionPage { questions, total })
}

/// Page `req` of the questions whose text contains `term`, ignoring case.
///
/// No match at all is an error, distinct from a page past the last match.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
    req: PageRequest,
) -> Result<QuestionPage, DomainError> {
    let matches = questions::search(conn, term).await?;
    if matches.is_empty() {
        return Err(DomainError::not_found(
            NotFoundKind::SearchResults,
            format!("No questions match '{term}'"),
        ));
    }

    let total = matches.len() as u64;
    debug!(total, page = req.page(), "question.search");
    let questions = paginate(matches, req)?;
    Ok(QuestionPage { questions, total })
}

/// The category and all of its questions. An unknown category is an error,
/// a known one without questions is not.
pub async fn by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<(Category, Vec<Question>), DomainError> {
    let category = categories::require(conn, category_id).await?;
    let questions = questions::by_category(conn, category_id).await?;
    Ok((category, questions))
}

/// Check a draft without touching the database.
pub fn validate(draft: QuestionDraft) -> Result<NewQuestion, DomainError> {
    let question = draft.question.trim();
    if question.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::BlankField,
            "question must not be blank",
        ));
    }

    let answer = draft.answer.trim();
    if answer.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::BlankField,
            "answer must not be blank",
        ));
    }

    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&draft.difficulty) {
        return Err(DomainError::validation(
            ValidationKind::Difficulty,
            format!(
                "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {}",
                draft.difficulty
            ),
        ));
    }

    // Range checked above.
    let difficulty = draft.difficulty as i32;

    Ok(NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        difficulty,
        category: draft.category,
    })
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft: QuestionDraft,
) -> Result<Question, DomainError> {
    let new = validate(draft)?;

    if categories::find(conn, new.category).await?.is_none() {
        return Err(DomainError::validation(
            ValidationKind::UnknownCategory,
            format!("Category {} does not exist", new.category),
        ));
    }

    let created = questions::create(conn, new).await?;
    info!(
        question_id = created.id,
        category = created.category,
        difficulty = created.difficulty,
        "question.created"
    );
    Ok(created)
}

/// Delete a question and return how many remain.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DomainError> {
    questions::delete(conn, id).await?;
    let remaining = questions::count_all(conn).await?;
    info!(question_id = id, remaining, "question.deleted");
    Ok(remaining)
}
