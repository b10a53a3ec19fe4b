use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn from_domain(error: DomainError) -> Self {
        match error {
            DomainError::Validation(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            DomainError::NotFound(message) => Self {
                status: StatusCode::NOT_FOUND,
                message,
            },
            // Storage details are logged, never exposed to the client.
            DomainError::Storage(detail) => {
                error!(detail = %detail, "storage fault");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal Server Error".to_string(),
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

/// JSON body extractor whose rejection carries the same `{error}` body
/// as every other failure, instead of axum's plain-text default.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
