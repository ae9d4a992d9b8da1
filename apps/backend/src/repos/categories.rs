//! Category repository functions. Categories are seeded by migration and
//! never written by the API.

use sea_orm::ConnectionTrait;

use crate::adapters::categories_sea as categories_adapter;
use crate::entities::categories;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    /// Display name, stored in the `type` column.
    pub kind: String,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind,
        }
    }
}

/// All categories ordered by id.
pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Category>, DomainError> {
    let models = categories_adapter::list_all(conn).await?;
    Ok(models.into_iter().map(Category::from).collect())
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Category>, DomainError> {
    let model = categories_adapter::find_by_id(conn, id).await?;
    Ok(model.map(Category::from))
}

/// Like [`find`] but a missing category is an error.
pub async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Category, DomainError> {
    find(conn, id)
        .await?
        .ok_or_else(|| DomainError::category_not_found(id))
}
