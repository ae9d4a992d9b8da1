use actix_web::test;
use backend_test_support::in_band::{assert_in_band_failure, expect_success};
use serde_json::json;
use trivia_backend::db::txn::SharedTxn;
use trivia_backend::repos::questions;
use trivia_backend::AppError;

use crate::support::factory::{seed_numbered, seed_sample_bank, ART, SCIENCE};
use crate::support::shared_txn::attach;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn first_page_has_ten_questions_and_full_total() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let bank = seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = attach(test::TestRequest::get().uri("/questions?page=1").to_request(), &shared);
    let body = expect_success(test::call_service(&app, req).await).await;

    let page = body["questions"].as_array().expect("questions array");
    assert_eq!(page.len(), 10);
    assert_eq!(page[0]["id"], bank[0].id);
    assert_eq!(page[0]["answer"], "Maya Angelou");
    assert_eq!(body["total_questions"], 19);
    assert_eq!(body["currentCategory"], "All");
    assert_eq!(body["categories"]["2"], "Art");

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn page_defaults_to_one_and_last_page_is_partial() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let bank = seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = attach(test::TestRequest::get().uri("/questions").to_request(), &shared);
    let body = expect_success(test::call_service(&app, req).await).await;
    assert_eq!(body["questions"][0]["id"], bank[0].id);

    let req = attach(test::TestRequest::get().uri("/questions?page=2").to_request(), &shared);
    let body = expect_success(test::call_service(&app, req).await).await;
    let page = body["questions"].as_array().expect("questions array");
    assert_eq!(page.len(), 9);
    assert_eq!(page[0]["id"], bank[10].id);
    assert_eq!(body["total_questions"], 19);

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn out_of_range_pages_are_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for uri in ["/questions?page=3", "/questions?page=1000", "/questions?page=0"] {
        let req = attach(test::TestRequest::get().uri(uri).to_request(), &shared);
        assert_in_band_failure(test::call_service(&app, req).await, 404, "Not Found").await;
    }

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn empty_bank_has_no_first_page() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = attach(test::TestRequest::get().uri("/questions").to_request(), &shared);
    assert_in_band_failure(test::call_service(&app, req).await, 404, "Not Found").await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn non_numeric_page_is_bad_request() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/questions?page=abc").to_request();
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    Ok(())
}

#[actix_web::test]
async fn delete_removes_question_once() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let bank = seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let victim = bank[4].id;

    let req = attach(
        test::TestRequest::delete()
            .uri(&format!("/questions/{victim}"))
            .to_request(),
        &shared,
    );
    let body = expect_success(test::call_service(&app, req).await).await;
    assert_eq!(body["id"], victim);
    assert_eq!(body["total_questions"], 18);

    assert_eq!(questions::find(shared.transaction(), victim).await?, None);

    // A second delete of the same id fails and changes nothing.
    let req = attach(
        test::TestRequest::delete()
            .uri(&format!("/questions/{victim}"))
            .to_request(),
        &shared,
    );
    let body = assert_in_band_failure(test::call_service(&app, req).await, 404, "Not Found").await;
    assert_eq!(body["detail"], format!("Question {victim} not found"));
    assert_eq!(questions::count_all(shared.transaction()).await?, 18);

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn delete_unknown_or_malformed_id_fails() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = attach(test::TestRequest::delete().uri("/questions/9999").to_request(), &shared);
    assert_in_band_failure(test::call_service(&app, req).await, 404, "Not Found").await;
    assert_eq!(questions::count_all(shared.transaction()).await?, 19);

    let req = attach(test::TestRequest::delete().uri("/questions/abc").to_request(), &shared);
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn create_then_search_finds_new_question() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = attach(
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!({
                "question": "  What is the chemical symbol for gold?  ",
                "answer": "Au",
                "difficulty": 2,
                "category": SCIENCE,
            }))
            .to_request(),
        &shared,
    );
    let body = expect_success(test::call_service(&app, req).await).await;
    let id = body["id"].as_i64().expect("created id");
    assert_eq!(body["question"]["id"], id);
    assert_eq!(body["question"]["question"], "What is the chemical symbol for gold?");
    assert_eq!(body["question"]["category"], SCIENCE);

    let req = attach(
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!({ "searchTerm": "CHEMICAL symbol" }))
            .to_request(),
        &shared,
    );
    let body = expect_success(test::call_service(&app, req).await).await;
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["id"], id);
    assert_eq!(body["currentCategory"], "All");

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn create_accepts_numeric_strings() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = attach(
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!({
                "question": "Who painted the ceiling of the Sistine Chapel?",
                "answer": "Michelangelo",
                "difficulty": "3",
                "category": "2",
            }))
            .to_request(),
        &shared,
    );
    let body = expect_success(test::call_service(&app, req).await).await;
    assert_eq!(body["question"]["difficulty"], 3);
    assert_eq!(body["question"]["category"], ART);

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn invalid_create_is_unprocessable_and_stores_nothing() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let cases = [
        json!({ "question": "   ", "answer": "a", "difficulty": 1, "category": 1 }),
        json!({ "question": "q?", "answer": "", "difficulty": 1, "category": 1 }),
        json!({ "question": "q?", "answer": "a", "difficulty": 0, "category": 1 }),
        json!({ "question": "q?", "answer": "a", "difficulty": 6, "category": 1 }),
        json!({ "question": "q?", "answer": "a", "difficulty": 3, "category": 1000 }),
    ];

    for payload in cases {
        let req = attach(
            test::TestRequest::post()
                .uri("/questions")
                .set_json(&payload)
                .to_request(),
            &shared,
        );
        assert_in_band_failure(
            test::call_service(&app, req).await,
            422,
            "Unprocessable Entity",
        )
        .await;
    }

    assert_eq!(questions::count_all(shared.transaction()).await?, 0);

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn unrecognised_bodies_are_bad_request() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/questions")
        .set_json(json!({}))
        .to_request();
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    let req = test::TestRequest::post()
        .uri("/questions")
        .set_json(json!({ "question": "only half a question" }))
        .to_request();
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    let req = test::TestRequest::post()
        .uri("/questions")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    let req = test::TestRequest::post().uri("/questions").to_request();
    assert_in_band_failure(test::call_service(&app, req).await, 400, "Bad Request").await;

    Ok(())
}

#[actix_web::test]
async fn search_is_case_insensitive_and_paginated() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    seed_sample_bank(shared.transaction()).await?;
    seed_numbered(shared.transaction(), 12, SCIENCE).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = attach(
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!({ "searchTerm": "world cup" }))
            .to_request(),
        &shared,
    );
    let body = expect_success(test::call_service(&app, req).await).await;
    assert_eq!(body["total_questions"], 2);

    // 12 generated questions match; the second page holds the last two.
    let req = attach(
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!({ "searchTerm": "GENERATED", "page": 2 }))
            .to_request(),
        &shared,
    );
    let body = expect_success(test::call_service(&app, req).await).await;
    assert_eq!(body["total_questions"], 12);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(2));

    let req = attach(
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!({ "searchTerm": "generated", "page": 3 }))
            .to_request(),
        &shared,
    );
    assert_in_band_failure(test::call_service(&app, req).await, 404, "Not Found").await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn search_without_matches_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(&state).await?;
    seed_sample_bank(shared.transaction()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for term in ["xyzzy", "100%"] {
        let req = attach(
            test::TestRequest::post()
                .uri("/questions")
                .set_json(json!({ "searchTerm": term }))
                .to_request(),
            &shared,
        );
        assert_in_band_failure(test::call_service(&app, req).await, 404, "Not Found").await;
    }

    shared.rollback().await?;
    Ok(())
}
