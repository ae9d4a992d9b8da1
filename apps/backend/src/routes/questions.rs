use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use crate::extractors::{QuestionId, ValidatedJson};
use crate::protocol::requests::{PageQuery, QuestionsRequest, SearchRequest};
use crate::protocol::responses::{
    CreateQuestionResponse, DeleteQuestionResponse, QuestionListResponse, ALL_CATEGORIES_LABEL,
};
use crate::services::questions::QuestionDraft;
use crate::services::{categories, questions};
use crate::state::app_state::AppState;

/// `GET /questions?page=N`
async fn list_questions(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = PageRequest::new(query.page.unwrap_or(1), app_state.questions_per_page())?;

    let (page, categories) = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            let page = questions::list_page(txn, page).await?;
            let categories = categories::category_map(txn).await?;
            Ok((page, categories))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(
        QuestionListResponse::new(page.questions, page.total, ALL_CATEGORIES_LABEL)
            .with_categories(categories),
    ))
}

/// `POST /questions`: search or create depending on the body.
async fn post_questions(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<QuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    match body.into_inner() {
        QuestionsRequest::Search(search) => search_questions(&req, &app_state, search).await,
        QuestionsRequest::Create(create) => {
            let draft: QuestionDraft = create.into();
            let created = with_txn(Some(&req), &app_state, move |txn| {
                Box::pin(async move { Ok(questions::create(txn, draft).await?) })
            })
            .await?;

            Ok(HttpResponse::Ok().json(CreateQuestionResponse::from(created)))
        }
    }
}

async fn search_questions(
    req: &HttpRequest,
    app_state: &AppState,
    search: SearchRequest,
) -> Result<HttpResponse, AppError> {
    let page = PageRequest::new(search.page.unwrap_or(1), app_state.questions_per_page())?;
    let term = search.search_term;

    let found = with_txn(Some(req), app_state, move |txn| {
        Box::pin(async move { Ok(questions::search(txn, &term, page).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse::new(
        found.questions,
        found.total,
        ALL_CATEGORIES_LABEL,
    )))
}

/// `DELETE /questions/{question_id}`
async fn delete_question(
    req: HttpRequest,
    question_id: QuestionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let QuestionId(id) = question_id;

    let remaining = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { Ok(questions::delete(txn, id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeleteQuestionResponse {
        success: true,
        id,
        total_questions: remaining,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/questions")
            .route(web::get().to(list_questions))
            .route(web::post().to(post_questions)),
    )
    .route(
        "/questions/{question_id}",
        web::delete().to(delete_question),
    );
}
