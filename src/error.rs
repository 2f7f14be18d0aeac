use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("email already exists")]
    EmailTaken,
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl From<sqlx::Error> for AppError {
    fn from(inner: sqlx::Error) -> Self {
        let unique = inner
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());
        if unique {
            AppError::EmailTaken
        } else {
            AppError::Database(inner)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::EmailTaken => {
                tracing::warn!("signup rejected: email already exists");
                (StatusCode::BAD_REQUEST, "Email already exists").into_response()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::InvalidBody(msg) => {
                tracing::warn!(%msg, "rejected request body");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}
