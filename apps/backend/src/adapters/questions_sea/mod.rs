//! SeaORM adapter for the questions table.
//!
//! Every listing is ordered by ascending id, which is insertion order.

use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::questions;

pub mod dto;

pub use dto::QuestionCreate;

const LIKE_ESCAPE: char = '\\';

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    questions::Entity::find().count(conn).await
}

pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find_by_id(id).one(conn).await
}

pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, sea_orm::DbErr> {
    let active = questions::ActiveModel {
        id: NotSet,
        question: Set(dto.question),
        answer: Set(dto.answer),
        difficulty: Set(dto.difficulty),
        category: Set(dto.category),
    };
    active.insert(conn).await
}

/// Delete by id; returns the number of rows removed (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = questions::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

/// Questions whose text contains `term`, ignoring case. `term` is matched literally.
///
/// SQLite's `LOWER()` only folds ASCII, so on SQLite the comparison runs here
/// with Unicode case folding. Postgres folds the full range in the database.
pub async fn search_text<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    let needle = term.to_lowercase();

    if conn.get_database_backend() == DbBackend::Sqlite {
        let all = questions::Entity::find()
            .order_by_asc(questions::Column::Id)
            .all(conn)
            .await?;
        return Ok(all
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect());
    }

    let pattern = format!("%{}%", escape_like(&needle));
    questions::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(questions::Column::Question)))
                .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
        )
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: i64,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::Category.eq(category))
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

/// Ids of all questions, or of those in `category` when given.
pub async fn list_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: Option<i64>,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let mut query = questions::Entity::find()
        .select_only()
        .column(questions::Column::Id)
        .order_by_asc(questions::Column::Id);
    if let Some(category) = category {
        query = query.filter(questions::Column::Category.eq(category));
    }
    query.into_tuple::<i64>().all(conn).await
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}
