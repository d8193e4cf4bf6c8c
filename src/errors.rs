use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Connection Pool Error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Database Error: {0}")]
    Database(#[from] diesel::result::Error),

    // A row came back that does not fit `Product`, e.g. a NULL price.
    #[error("Row Scan Error: {0}")]
    Scan(String),

    #[error("Template Error: {0}")]
    Template(#[from] tera::Error),

    #[error("Blocking Task Error: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        // Full detail goes to the log only; the client gets a generic body.
        tracing::error!(application_error = %self, "Responding with error");
        let body = match self {
            AppError::Template(_) => "Error rendering page",
            _ => "Error retrieving products",
        };
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
