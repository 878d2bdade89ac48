//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use helpdesk_core::error::HelpdeskError;

use crate::token::TokenError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] HelpdeskError),

    #[error("token error: {0}")]
    Token(#[from] TokenError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Domain(HelpdeskError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Domain(HelpdeskError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Domain(HelpdeskError::Validation { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Domain(HelpdeskError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Domain(HelpdeskError::Connectivity(_)) => StatusCode::BAD_GATEWAY,
            Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
