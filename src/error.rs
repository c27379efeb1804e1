use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::handlers::html;

#[derive(Debug, ThisError)]
pub enum AstError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid cookie key: {0}")]
    InvalidCookieKey(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AstError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AstError::DatabaseError(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Unable to reach the property database.",
            ),
            AstError::Config(_)
            | AstError::InvalidConfig(_)
            | AstError::InvalidCookieKey(_)
            | AstError::UrlParse(_)
            | AstError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.",
            ),
        };
        (status, Html(html::error_page(status, message))).into_response()
    }
}
