use actix_web::test;
use backend_test_support::in_band::{assert_in_band_failure, expect_success};
use serde_json::json;
use trivia_backend::db::txn::SharedTxn;
use trivia_backend::AppError;

use crate::support::factory::{seed_sample_bank, GEOGRAPHY};
use crate::support::shared_txn::attach;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn never_repeats_previous_questions() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let bank = seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Positions 13 and 14 of the bank; on a fresh database these are ids 13 and 14.
    let previous = [bank[12].id, bank[13].id];
    let remaining = bank[14].id;

    for _ in 0..5 {
        let req = attach(
            test::TestRequest::post()
                .uri("/quizzes")
                .set_json(json!({
                    "previous_questions": previous,
                    "quiz_category": { "id": GEOGRAPHY, "type": "Geography" },
                }))
                .to_request(),
            &shared,
        );
        let body = expect_success(test::call_service(&app, req).await).await;
        assert_eq!(body["question"]["id"], remaining);
        assert_eq!(body["question"]["category"], GEOGRAPHY);
    }

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn exhausted_category_returns_null_question() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let bank = seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let previous: Vec<i64> = bank
        .iter()
        .filter(|q| q.category == GEOGRAPHY)
        .map(|q| q.id)
        .collect();

    let req = attach(
        test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({
                "previous_questions": previous,
                "quiz_category": { "id": GEOGRAPHY },
            }))
            .to_request(),
        &shared,
    );
    let body = expect_success(test::call_service(&app, req).await).await;
    assert!(body["question"].is_null());

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn category_zero_plays_across_all_categories() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let bank = seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (last, served) = bank.split_last().expect("non-empty bank");
    let previous: Vec<i64> = served.iter().map(|q| q.id).collect();

    let req = attach(
        test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({
                "previous_questions": previous,
                "quiz_category": { "id": "0", "type": "click" },
            }))
            .to_request(),
        &shared,
    );
    let body = expect_success(test::call_service(&app, req).await).await;
    assert_eq!(body["question"]["id"], last.id);

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn unknown_category_is_bad_request() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = attach(
        test::TestRequest::post()
            .uri("/quizzes")
            .set_json(json!({
                "previous_questions": [],
                "quiz_category": { "id": 1000 },
            }))
            .to_request(),
        &shared,
    );
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn malformed_or_empty_body_is_bad_request() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post().uri("/quizzes").to_request();
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    let req = test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({ "previous_questions": [] }))
        .to_request();
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    let req = test::TestRequest::post()
        .uri("/quizzes")
        .set_json(json!({
            "previous_questions": "13,14",
            "quiz_category": { "id": 3 },
        }))
        .to_request();
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    Ok(())
}
