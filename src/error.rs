//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// One violated request constraint. Serializes as a single-entry
/// `{field: message}` map, so a 400 body is an ordered array of such maps,
/// one per violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Serialize for FieldViolation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.message)?;
        map.end()
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Absence maps to 404 with an empty body.
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(violations) => {
                (StatusCode::BAD_REQUEST, Json(violations)).into_response()
            }
            AppError::Db(e) => {
                if matches!(e, sqlx::Error::RowNotFound) {
                    StatusCode::NOT_FOUND.into_response()
                } else {
                    tracing::error!(error = %e, "database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(error_body("database_error", "database error")),
                    )
                        .into_response()
                }
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(error_body("bad_request", &message)),
            )
                .into_response(),
            AppError::Internal(message) => {
                tracing::error!(%message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_body("internal_error", &message)),
                )
                    .into_response()
            }
        }
    }
}

fn error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_violation_serializes_as_single_entry_map() {
        let v = FieldViolation::new("beerName", "must not be blank");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json, serde_json::json!({"beerName": "must not be blank"}));
    }

    #[test]
    fn violation_list_keeps_order() {
        let list = vec![
            FieldViolation::new("beerName", "must not be blank"),
            FieldViolation::new("price", "must not be negative"),
        ];
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"beerName":"must not be blank"},{"price":"must not be negative"}]"#
        );
    }
}
