use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::Query;

use crate::m20250301_000001_init::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Categories shipped with every database. The API never writes categories.
pub const SEED_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Categories::Table)
            .columns([Categories::Id, Categories::Type]);

        for (id, kind) in SEED_CATEGORIES {
            insert
                .values([id.into(), kind.into()])
                .map_err(|e| DbErr::Migration(format!("seed row {id}: {e}")))?;
        }

        manager.exec_stmt(insert.to_owned()).await?;
        tracing::info!(count = SEED_CATEGORIES.len(), "seeded categories");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids = SEED_CATEGORIES.iter().map(|(id, _)| *id);
        let delete = Query::delete()
            .from_table(Categories::Table)
            .and_where(Expr::col(Categories::Id).is_in(ids))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
