//! Integer ids taken from path segments.
//!
//! Parsing happens here so a non-numeric id renders as an in-band
//! Bad Request instead of actix's default 404.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

fn parse_positive(req: &HttpRequest, param: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(param)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {param} parameter")))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {param}: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{param} must be positive, got: {id}"),
        ));
    }

    Ok(id)
}

/// `{question_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionId(pub i64);

impl FromRequest for QuestionId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_positive(req, "question_id", ErrorCode::InvalidQuestionId).map(QuestionId))
    }
}

/// `{category_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryId(pub i64);

impl FromRequest for CategoryId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_positive(req, "category_id", ErrorCode::InvalidCategoryId).map(CategoryId))
    }
}
