use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sea_orm::TransactionTrait;
use trivia_backend::db::require_db;
use trivia_backend::services::quiz::next_question;
use trivia_backend::AppError;

use crate::common::proptest_prelude::proptest_prelude_config;
use crate::support::build_test_state;
use crate::support::factory::{seed_numbered, HISTORY};

/// Serve `already_served` questions first, then check the next draw is fresh.
async fn draw_after(size: usize, already_served: usize, seed: u64) -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let bank = seed_numbered(&txn, size, HISTORY).await?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let previous: Vec<i64> = bank.iter().take(already_served).map(|q| q.id).collect();
    let next = next_question(&txn, HISTORY, &previous, &mut rng).await?;

    match next {
        Some(q) => {
            assert!(already_served < size);
            assert!(!previous.contains(&q.id));
        }
        None => assert_eq!(already_served, size),
    }

    txn.rollback().await?;
    Ok(())
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn next_never_repeats_previous(
        (size, served) in (1usize..12).prop_flat_map(|size| (Just(size), 0..=size)),
        seed in any::<u64>(),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        let result = rt.block_on(draw_after(size, served, seed));
        prop_assert!(result.is_ok(), "draw failed: {:?}", result.err());
    }
}
