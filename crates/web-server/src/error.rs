use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::schemas::{ErrorBody, FieldError};

/// Message returned when an id-targeted operation matches no row.
pub const USER_NOT_FOUND: &str = "Usuário não encontrado";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request was rejected before reaching a handler.
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },
    /// Rejected by the framework with a status of its own, e.g. a body over
    /// the size limit.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
}

impl ApiError {
    pub fn user_not_found() -> Self {
        ApiError::NotFound(USER_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts our custom `ApiError` into an HTTP response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            ApiError::Validation { message, details } => {
                tracing::debug!(%message, "Request rejected by validation.");
                (message, details)
            }
            ApiError::Rejected { message, .. } => {
                tracing::debug!(%message, %status, "Request rejected.");
                (message, Vec::new())
            }
            ApiError::NotFound(message) => (message, Vec::new()),
            ApiError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    "An internal database error occurred".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            details: (!details.is_empty()).then_some(details),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let message = err.body_text();
                ApiError::Validation {
                    details: data_error_field(&message).into_iter().collect(),
                    message,
                }
            }
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                ApiError::Validation {
                    message: rejection.body_text(),
                    details: Vec::new(),
                }
            }
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

/// Recovers the offending field from a deserialization message such as
/// "...target type: missing field `email` at line 1 column 13" or
/// "...target type: name: invalid type: integer `5`, expected a string".
fn data_error_field(text: &str) -> Option<FieldError> {
    let (_, detail) = text.split_once(": ")?;
    if let Some(rest) = detail.strip_prefix("missing field `") {
        let (field, _) = rest.split_once('`')?;
        return Some(FieldError {
            field: field.to_string(),
            message: "missing required field".to_string(),
        });
    }
    let (path, message) = detail.split_once(": ")?;
    if path.is_empty() || path.contains(char::is_whitespace) {
        return None;
    }
    Some(FieldError {
        field: path.to_string(),
        message: message.to_string(),
    })
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            details: vec![FieldError {
                field: "id".to_string(),
                message: "must be an integer".to_string(),
            }],
        }
    }
}

impl From<garde::Report> for ApiError {
    fn from(report: garde::Report) -> Self {
        let details = report
            .iter()
            .map(|(path, error)| FieldError {
                field: path.to_string(),
                message: error.to_string(),
            })
            .collect();
        ApiError::Validation {
            message: "Request body failed validation".to_string(),
            details,
        }
    }
}
