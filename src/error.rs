//! Error types and error handling for the application
//!
//! Handlers return `AppError`; this is the only place that decides HTTP
//! status codes. Every error body has the shape `{"message": "..."}`.

use crate::contacts::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body was missing or carried no contact fields
    #[error("Bad request: No data provided.")]
    EmptyBody,

    /// Request body could not be parsed as a contact payload
    #[error("Bad request: {0}")]
    InvalidBody(String),

    /// No contact matched; the message is returned verbatim
    #[error("{0}")]
    NotFound(String),

    /// A contact with this name already exists
    #[error("Contact with name '{0}' already exists.")]
    Conflict(String),

    /// A contact without a name already exists
    #[error("A contact without a name already exists.")]
    NamelessConflict,

    /// Read failed; the driver error is logged but not returned
    #[error("{context}")]
    Fetch {
        /// Client-facing message
        context: &'static str,
        /// Underlying store failure
        #[source]
        source: StoreError,
    },

    /// Write failed; the driver error is appended to the message
    #[error("{context}: {source}")]
    Write {
        /// Client-facing message prefix
        context: &'static str,
        /// Underlying store failure
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Map a store error raised while reading
    pub fn fetch(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Fetch { context, source }
    }

    /// Map a store error raised while writing
    pub fn write(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Write { context, source }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyBody | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::NamelessConflict => StatusCode::CONFLICT,
            AppError::Fetch { .. } | AppError::Write { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Fetch { context, source } | AppError::Write { context, source } => {
                tracing::error!(error = %source, "{}", context);
            }
            _ => tracing::debug!(status = status.as_u16(), "{}", self),
        }

        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::StoreError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::EmptyBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidBody("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("gone".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("Ada".to_string()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::NamelessConflict.status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::fetch("Error fetching contacts")(StoreError::Duplicate).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::Conflict("Ada".to_string()).to_string(),
            "Contact with name 'Ada' already exists."
        );
        assert_eq!(
            AppError::fetch("Error fetching contact")(StoreError::Duplicate).to_string(),
            "Error fetching contact"
        );
        assert_eq!(
            AppError::write("Failed to add contact")(StoreError::Duplicate).to_string(),
            "Failed to add contact: duplicate contact name"
        );
    }
}
