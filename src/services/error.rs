//! Error handling utilities for route handlers

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::views::{escape, layout};

/// Errors a route handler can answer with
#[derive(Debug, Error)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,

    #[error("this action is unauthorized")]
    Forbidden,

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Validation(errors) => {
                let items: String = validation_messages(errors)
                    .iter()
                    .map(|m| format!("<li>{}</li>", escape(m)))
                    .collect();
                format!("<h1>The given data was invalid.</h1><ul class=\"errors\">{items}</ul>")
            }
            other => format!("<h1>{}</h1>", escape(&other.to_string())),
        };

        let title = status.canonical_reason().unwrap_or("Error");
        (status, Html(layout(title, &body))).into_response()
    }
}

/// Flatten field errors into display messages, sorted by field name
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match (&e.message, &*e.code) {
                (Some(message), _) => message.to_string(),
                (None, "required") => format!("The {field} field is required."),
                (None, _) => format!("The {field} field is invalid."),
            })
        })
        .collect()
}

/// Extension trait for logging errors and converting to AppError
pub trait LogErr<T> {
    /// Log error with context and return `AppError::Internal`
    fn log_500(self, context: &str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> LogErr<T> for Result<T, E> {
    fn log_500(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!(error = %e, "{}", context);
            AppError::Internal
        })
    }
}
