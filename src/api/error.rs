use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::query::QueryError;
use crate::user::UserError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("No current user")]
    NoUser,
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    User(#[from] UserError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NoUser => StatusCode::NOT_FOUND,
            ApiError::Query(QueryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::User(UserError::NotFound(_)) => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
