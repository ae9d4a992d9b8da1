use std::collections::BTreeMap;

use sea_orm::ConnectionTrait;

use crate::errors::domain::DomainError;
use crate::repos::categories;

/// Category id to display name, ordered by id.
pub type CategoryMap = BTreeMap<i64, String>;

pub async fn category_map<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<CategoryMap, DomainError> {
    let all = categories::list(conn).await?;
    Ok(all.into_iter().map(|c| (c.id, c.kind)).collect())
}
