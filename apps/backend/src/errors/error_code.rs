//! Error codes for the trivia API.
//!
//! Every failure the API reports carries one of these codes in its `detail`
//! logs and in the structured request log. Add new codes here; never pass
//! ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request shape
    /// Request body is not valid JSON or has the wrong shape
    InvalidJson,
    /// Question id path segment is not a positive integer
    InvalidQuestionId,
    /// Category id path segment or body field is not an integer
    InvalidCategoryId,
    /// Query string could not be parsed
    InvalidQuery,
    /// Category does not exist
    UnknownCategory,

    // Semantic validation of a new question
    /// General validation error
    ValidationError,
    /// Question or answer text is blank
    BlankField,
    /// Difficulty outside the accepted range
    InvalidDifficulty,

    // Resource Not Found
    /// Question not found
    QuestionNotFound,
    /// Requested page lies beyond the available questions
    PageOutOfRange,
    /// Search term matched no questions
    NoSearchResults,
    /// Unmatched route or generic not found
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuestionId => "INVALID_QUESTION_ID",
            Self::InvalidCategoryId => "INVALID_CATEGORY_ID",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::UnknownCategory => "UNKNOWN_CATEGORY",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BlankField => "BLANK_FIELD",
            Self::InvalidDifficulty => "INVALID_DIFFICULTY",

            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::PageOutOfRange => "PAGE_OUT_OF_RANGE",
            Self::NoSearchResults => "NO_SEARCH_RESULTS",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
