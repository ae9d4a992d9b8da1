use migration::SEED_CATEGORIES;
use sea_orm::TransactionTrait;
use trivia_backend::adapters::categories_sea;
use trivia_backend::db::require_db;
use trivia_backend::AppError;

use crate::support::build_test_state;

#[tokio::test]
async fn migrations_seed_six_categories_in_id_order() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let rows = categories_sea::list_all(&txn).await?;
    let pairs: Vec<(i64, &str)> = rows.iter().map(|c| (c.id, c.kind.as_str())).collect();
    assert_eq!(pairs, SEED_CATEGORIES.to_vec());

    assert_eq!(
        categories_sea::find_by_id(&txn, 4).await?.map(|c| c.kind),
        Some("History".to_string())
    );
    assert!(categories_sea::find_by_id(&txn, 0).await?.is_none());

    txn.rollback().await?;
    Ok(())
}
