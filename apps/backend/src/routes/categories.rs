use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::CategoryId;
use crate::protocol::responses::{CategoriesResponse, QuestionListResponse};
use crate::services::{categories, questions};
use crate::state::app_state::AppState;

/// `GET /categories`
async fn list_categories(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let categories = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move { Ok(categories::category_map(txn).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CategoriesResponse::new(categories)))
}

/// `GET /categories/{category_id}/questions`
async fn questions_in_category(
    req: HttpRequest,
    category_id: CategoryId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CategoryId(category_id) = category_id;

    let (category, found) = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { Ok(questions::by_category(txn, category_id).await?) })
    })
    .await?;

    let total = found.len() as u64;
    Ok(HttpResponse::Ok().json(QuestionListResponse::new(found, total, category.kind)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/categories", web::get().to(list_categories))
        .route(
            "/categories/{category_id}/questions",
            web::get().to(questions_in_category),
        );
}
