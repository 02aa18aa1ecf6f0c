//! Transport-level error taxonomy and JSON rendering.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use landing_core::ServiceError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl RpcError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code carried in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<ServiceError> for RpcError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::Validation(_) => RpcError::BadRequest(message),
            ServiceError::BrandingNotFound => RpcError::NotFound(message),
            ServiceError::Repo(_) => RpcError::Internal(message),
        }
    }
}

impl From<JsonRejection> for RpcError {
    fn from(e: JsonRejection) -> Self {
        RpcError::BadRequest(e.body_text())
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::RpcError;
    use axum::http::StatusCode;
    use landing_core::{ServiceError, ValidationError};

    #[test]
    fn service_errors_map_to_status_codes() {
        let not_found = RpcError::from(ServiceError::BrandingNotFound);
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.code(), "NOT_FOUND");
        assert_eq!(not_found.to_string(), "no branding configuration found");

        let invalid = RpcError::from(ServiceError::Validation(
            ValidationError::NegativeOrderIndex {
                field: "order_index",
                value: -1,
            },
        ));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let store = RpcError::from(ServiceError::Repo(landing_core::RepoError::NotFound(
            "team_members",
        )));
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.code(), "INTERNAL_SERVER_ERROR");
    }
}
