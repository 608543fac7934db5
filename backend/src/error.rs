#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Json is rejected")]
    JsonRejection(#[from] JsonRejection),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    StoreError(#[from] crate::db::Error),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let trace_message = match &self {
            Self::JsonRejection(rejection) => {
                format!("{}: {}", self, rejection)
            }
            Self::UnexpectedError(e) => format!("{:#}", e),
            _ => self.to_string(),
        };
        tracing::error!("{}", trace_message);

        let status = match &self {
            Self::JsonRejection(_e) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StoreError(_e) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnexpectedError(_e) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // every error leaves as the same `{"message": ...}` shape
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use hyper::StatusCode;
