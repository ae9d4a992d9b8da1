use actix_web::{web, HttpRequest, HttpResponse};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::protocol::requests::QuizRequest;
use crate::protocol::responses::QuizResponse;
use crate::services::quiz;
use crate::state::app_state::AppState;

/// `POST /quizzes`
async fn next_quiz_question(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let QuizRequest {
        previous_questions,
        quiz_category,
    } = body.into_inner();

    let question = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            let mut rng = StdRng::from_os_rng();
            Ok(quiz::next_question(txn, quiz_category.id, &previous_questions, &mut rng).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(QuizResponse::new(question)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/quizzes", web::post().to(next_quiz_question));
}
