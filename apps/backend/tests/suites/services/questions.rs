use sea_orm::TransactionTrait;
use trivia_backend::db::require_db;
use trivia_backend::domain::pagination::PageRequest;
use trivia_backend::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use trivia_backend::repos::questions as questions_repo;
use trivia_backend::services::questions::{self, QuestionDraft};
use trivia_backend::AppError;

use crate::support::build_test_state;
use crate::support::factory::{seed_numbered, seed_sample_bank, GEOGRAPHY, HISTORY, SCIENCE};

#[tokio::test]
async fn pages_cover_every_question_once() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let bank = seed_numbered(&txn, 25, SCIENCE).await?;

    let mut seen = Vec::new();
    for page in 1..=3 {
        let out = questions::list_page(&txn, PageRequest::new(page, 10)?).await?;
        assert_eq!(out.total, 25);
        let expected = if page < 3 { 10 } else { 5 };
        assert_eq!(out.questions.len(), expected);
        seen.extend(out.questions.into_iter().map(|q| q.id));
    }
    let all: Vec<i64> = bank.iter().map(|q| q.id).collect();
    assert_eq!(seen, all);

    let err = questions::list_page(&txn, PageRequest::new(4, 10)?)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Page, _)));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn by_category_returns_only_that_category() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    seed_sample_bank(&txn).await?;

    let (category, found) = questions::by_category(&txn, HISTORY).await?;
    assert_eq!(category.kind, "History");
    assert_eq!(found.len(), 4);
    assert!(found.iter().all(|q| q.category == HISTORY));

    let err = questions::by_category(&txn, 77).await.unwrap_err();
    assert_eq!(err, DomainError::category_not_found(77));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn created_question_is_found_by_substring() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    seed_sample_bank(&txn).await?;

    let created = questions::create(
        &txn,
        QuestionDraft {
            question: "Which river flows through Budapest?".to_string(),
            answer: "The Danube".to_string(),
            difficulty: 2,
            category: GEOGRAPHY,
        },
    )
    .await?;

    let found = questions::search(&txn, "through bud", PageRequest::new(1, 10)?).await?;
    assert_eq!(found.total, 1);
    assert_eq!(found.questions, vec![created]);

    let err = questions::search(&txn, "no such words", PageRequest::new(1, 10)?)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::SearchResults, _)
    ));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    seed_sample_bank(&txn).await?;

    for term in ["%", "_"] {
        let err = questions::search(&txn, term, PageRequest::new(1, 10)?)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound(NotFoundKind::SearchResults, _)
        ));
    }

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn search_folds_case_beyond_ascii() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    seed_sample_bank(&txn).await?;

    let created = questions::create(
        &txn,
        QuestionDraft {
            question: "Where is ÉCOLE Polytechnique?".to_string(),
            answer: "Palaiseau".to_string(),
            difficulty: 3,
            category: GEOGRAPHY,
        },
    )
    .await?;

    for term in ["école", "ÉCOLE", "École poly"] {
        let found = questions::search(&txn, term, PageRequest::new(1, 10)?).await?;
        assert_eq!(found.total, 1, "term {term:?}");
        assert_eq!(found.questions[0].id, created.id);
    }

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn create_rejects_unknown_category() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let err = questions::create(
        &txn,
        QuestionDraft {
            question: "Orphan?".to_string(),
            answer: "Yes".to_string(),
            difficulty: 1,
            category: 42,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownCategory, _)
    ));
    assert_eq!(questions_repo::count_all(&txn).await?, 0);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn delete_then_lookup_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let bank = seed_sample_bank(&txn).await?;
    let id = bank[0].id;

    let remaining = questions::delete(&txn, id).await?;
    assert_eq!(remaining, 18);
    assert_eq!(questions_repo::find(&txn, id).await?, None);

    let err = questions::delete(&txn, id).await.unwrap_err();
    assert_eq!(err, DomainError::question_not_found(id));
    assert_eq!(questions_repo::count_all(&txn).await?, 18);

    txn.rollback().await?;
    Ok(())
}
