// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed login payload: {0}")]
    MalformedLogin(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session store failure: {0}")]
    SessionStore(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            // A login body that does not decode is reported as a server fault
            AppError::MalformedLogin(_)
            | AppError::SessionStore(_)
            | AppError::Internal(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MalformedLogin(_) => "AUTH_001",
            AppError::InvalidCredentials => "AUTH_002",
            AppError::Forbidden => "AUTH_003",
            AppError::NotFound(_) => "NF_001",
            AppError::InvalidInput(_) => "VAL_001",
            AppError::SessionStore(_) => "SESS_001",
            AppError::Internal(_) => "INT_001",
            AppError::Io(_) => "IO_001",
        }
    }

    /// Get a sanitized message suitable for production use
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::MalformedLogin(_) => "Invalid request format".to_string(),
            AppError::InvalidCredentials | AppError::Forbidden => {
                "Authentication failed".to_string()
            },
            AppError::NotFound(_) => "Resource not found".to_string(),
            AppError::InvalidInput(_) => "Invalid input provided".to_string(),
            AppError::SessionStore(_) | AppError::Internal(_) => {
                "An internal server error occurred".to_string()
            },
            AppError::Io(_) => "Internal server error".to_string(),
        }
    }

    /// Login failures answer with a bare status and no body
    fn is_login_failure(&self) -> bool {
        matches!(
            self,
            AppError::MalformedLogin(_) | AppError::InvalidCredentials | AppError::Forbidden
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_login_failure() {
            return status.into_response();
        }

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::InvalidInput(err.body_text())
    }
}
