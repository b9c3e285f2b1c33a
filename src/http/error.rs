//! Error responses for the HTTP API.

use crate::Error;
use crate::observability::current_request_id;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// An error surfaced to an HTTP client as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// The service rejected or failed the request.
    Service(Error),
    /// The request body could not be decoded.
    Rejected {
        /// Status chosen by the body extractor.
        status: StatusCode,
        /// Why the body was rejected.
        detail: String,
    },
}

impl ApiError {
    /// Status code for the wrapped error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Service(Error::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Service(Error::InvalidRule { .. } | Error::OperationFailed { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
            Self::Rejected { status, .. } => *status,
        }
    }

    /// Client-facing message. Internal failures are not echoed back.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Service(Error::InvalidInput(message)) => message.clone(),
            Self::Service(Error::InvalidRule { .. } | Error::OperationFailed { .. }) => {
                "Internal Server Error".to_string()
            },
            Self::Rejected { detail, .. } => detail.clone(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Service(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = current_request_id().unwrap_or_default();
        match &self {
            Self::Service(err) if status.is_server_error() => {
                tracing::error!(error = %err, request_id = %request_id, "Request failed");
            },
            Self::Service(err) => {
                tracing::debug!(error = %err, request_id = %request_id, "Rejected request");
            },
            Self::Rejected { detail, .. } => {
                tracing::debug!(
                    %status,
                    detail = %detail,
                    request_id = %request_id,
                    "Rejected request body"
                );
            },
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

/// JSON body extractor whose rejections use the `{"detail": ...}` shape.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
