//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Vehicle not found")]
    VehicleNotFound,

    #[error("Price sheet unavailable: {0}")]
    FeedUnavailable(#[from] reqwest::Error),

    #[error("Price sheet malformed: {0}")]
    FeedMalformed(String),

    #[error("Price sheet unreadable: {0}")]
    Csv(#[from] csv::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::VehicleNotFound => (StatusCode::NOT_FOUND, "Vehicle not found"),
            AppError::FeedUnavailable(e) => {
                tracing::warn!("Price sheet unavailable: {}", e);
                (StatusCode::BAD_GATEWAY, "Price sheet unavailable")
            }
            AppError::FeedMalformed(msg) => {
                tracing::warn!("Price sheet malformed: {}", msg);
                (StatusCode::BAD_GATEWAY, "Price sheet malformed")
            }
            AppError::Csv(e) => {
                tracing::warn!("Price sheet unreadable: {}", e);
                (StatusCode::BAD_GATEWAY, "Price sheet unreadable")
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };

        // Return simple HTML error page
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head><title>{} - Locadora Brasil</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/">Voltar ao balcão de orçamentos</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
