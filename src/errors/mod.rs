use std::io::Error as IoError;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub mod config;
pub mod store;

pub use config::ConfigError;
pub use store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    // Request-level errors
    #[error("Missing input: {0}")]
    MissingInput(String),
    #[error("Not found: {0}")]
    KeyNotFound(String),
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("Template error: {0}")]
    TemplateRender(String),
    #[error("Exhausted keyspace: no free short key after {0} attempts")]
    ExhaustedKeyspace(u32),
    #[error("Internal error: {0}")]
    Internal(String),
    // Infrastructure/system errors
    #[error("Server error: {0}")]
    Server(#[from] IoError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Logger error: {0}")]
    Logger(String),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::KeyNotFound("ShortKey Not Found".to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Only the messages reach the client, field names stay internal
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|e| e.message.clone().unwrap_or_else(|| "invalid".into()))
            .collect::<Vec<_>>()
            .join(", ");
        AppError::MissingInput(message)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) => StatusCode::BAD_REQUEST,
            AppError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::TemplateRender(_)
            | AppError::ExhaustedKeyspace(_)
            | AppError::Internal(_)
            | AppError::Server(_)
            | AppError::Config(_)
            | AppError::Logger(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_type, message) = match self {
            AppError::MissingInput(msg) => ("MISSING_INPUT", msg.as_str()),
            AppError::KeyNotFound(msg) => ("KEY_NOT_FOUND", msg.as_str()),
            AppError::MethodNotAllowed(msg) => ("METHOD_NOT_ALLOWED", msg.as_str()),
            // Internal details are logged by the caller, never echoed back
            AppError::TemplateRender(_) => ("TEMPLATE_RENDER", "Internal Server Error"),
            AppError::ExhaustedKeyspace(_) => ("EXHAUSTED_KEYSPACE", "Internal Server Error"),
            AppError::Internal(_)
            | AppError::Server(_)
            | AppError::Config(_)
            | AppError::Logger(_) => ("INTERNAL", "Internal Server Error"),
        };

        let error_message = if message.is_empty() {
            "An error occurred"
        } else {
            message
        };

        let code = self.status_code().as_u16();
        HttpResponse::build(self.status_code()).json(json!({
            "type": error_type,
            "message": error_message,
            "status_code": code,
        }))
    }
}
