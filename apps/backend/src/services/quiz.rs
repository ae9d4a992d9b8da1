use rand::Rng;
use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::quiz::{CandidateSet, QuizDraw};
use crate::errors::domain::DomainError;
use crate::repos::categories;
use crate::repos::questions::{self, Question};

/// Category id the client sends to play across every category.
pub const ALL_CATEGORIES: i64 = 0;

/// Serve one question of `category_id` that is not in `previous`, or `None`
/// once the category is exhausted.
pub async fn next_question<C, R>(
    conn: &C,
    category_id: i64,
    previous: &[i64],
    rng: &mut R,
) -> Result<Option<Question>, DomainError>
where
    C: ConnectionTrait + Send + Sync,
    R: Rng + ?Sized,
{
    let filter = if category_id == ALL_CATEGORIES {
        None
    } else {
        categories::require(conn, category_id).await?;
        Some(category_id)
    };

    let candidates = CandidateSet::new(questions::ids(conn, filter).await?, previous);

    match candidates.draw(rng) {
        QuizDraw::Question(id) => {
            // The id came from this transaction's snapshot, so it still exists.
            let question = questions::find(conn, id)
                .await?
                .ok_or_else(|| DomainError::question_not_found(id))?;
            info!(
                question_id = id,
                category = category_id,
                remaining = candidates.len() - 1,
                "quiz.served"
            );
            Ok(Some(question))
        }
        QuizDraw::Exhausted => {
            info!(
                category = category_id,
                served = previous.len(),
                "quiz.exhausted"
            );
            Ok(None)
        }
    }
}
