use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use db_infra::DbInfraError;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::infra::db_errors::map_db_err;
use crate::web::trace_ctx;

/// Body of every failed request.
///
/// Failures are reported in-band: the transport status stays 200 and the
/// classification travels in `error`/`message`.
#[derive(Debug, Serialize)]
pub struct FailurePayload {
    pub success: bool,
    pub error: u16,
    pub message: String,
    pub detail: String,
    pub trace_id: String,
}

/// Attached to the response extensions of an in-band failure so that
/// middleware can see the real classification behind the 200.
#[derive(Debug, Clone, Copy)]
pub struct InBandFailure {
    pub code: ErrorCode,
    pub classification: StatusCode,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Database timeout: {detail}")]
    Timeout { detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Validation { code, .. } => *code,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
            AppError::Timeout { .. } => ErrorCode::DbTimeout,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::BadRequest { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Validation { detail, .. }
            | AppError::Db { detail }
            | AppError::DbUnavailable { detail }
            | AppError::Timeout { detail }
            | AppError::Internal { detail, .. }
            | AppError::Config { detail } => detail,
        }
    }

    /// The HTTP classification reported in the payload's `error` field.
    ///
    /// This is never used as the transport status.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Db { .. }
            | AppError::DbUnavailable { .. }
            | AppError::Timeout { .. }
            | AppError::Internal { .. }
            | AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classification title, e.g. "Bad Request".
    pub fn title(&self) -> &'static str {
        self.status().canonical_reason().unwrap_or("Error")
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable {
            detail: "Database unavailable".to_string(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn to_payload(&self, trace_id: String) -> FailurePayload {
        FailurePayload {
            success: false,
            error: self.status().as_u16(),
            message: self.title().to_string(),
            detail: self.detail().to_string(),
            trace_id,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::BlankField => ErrorCode::BlankField,
                    ValidationKind::Difficulty => ErrorCode::InvalidDifficulty,
                    ValidationKind::UnknownCategory => ErrorCode::UnknownCategory,
                    _ => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::NotFound(kind, detail) => match kind {
                NotFoundKind::Question => AppError::not_found(ErrorCode::QuestionNotFound, detail),
                // Categories are chosen from the list the API hands out, so an
                // unknown one means the request itself is malformed.
                NotFoundKind::Category => AppError::bad_request(ErrorCode::UnknownCategory, detail),
                NotFoundKind::Page => AppError::not_found(ErrorCode::PageOutOfRange, detail),
                NotFoundKind::SearchResults => {
                    AppError::not_found(ErrorCode::NoSearchResults, detail)
                }
                _ => AppError::not_found(ErrorCode::NotFound, detail),
            },
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::Timeout => AppError::Timeout { detail },
                InfraErrorKind::DbUnavailable => AppError::DbUnavailable { detail },
                _ => AppError::db(detail),
            },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e).into()
    }
}

impl From<DbInfraError> for AppError {
    fn from(e: DbInfraError) -> Self {
        match e {
            DbInfraError::Config { message } => AppError::config(message),
            DbInfraError::Connect { message } => AppError::DbUnavailable { detail: message },
            DbInfraError::Migration { message } | DbInfraError::SchemaNotReady { message } => {
                AppError::internal(ErrorCode::Internal, message)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = trace_ctx::trace_id();
        let payload = self.to_payload(trace_id.clone());

        let mut resp = HttpResponse::Ok()
            .insert_header(("x-trace-id", trace_id))
            .json(payload);
        resp.extensions_mut().insert(InBandFailure {
            code: self.code(),
            classification: self.status(),
        });
        resp
    }
}
