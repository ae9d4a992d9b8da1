use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

/// Register every route plus the extractor configuration that keeps
/// query-string failures in-band.
///
/// Unmatched paths are handled by [`not_found`], which the caller installs
/// with `App::default_service`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::InvalidQuery, err.to_string()).into()
    }));

    cfg.configure(health::configure_routes)
        .configure(categories::configure_routes)
        .configure(questions::configure_routes)
        .configure(quizzes::configure_routes);
}

/// In-band Not Found for any path no route matches.
pub async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
