use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// Errors raised by the in-memory content store. Nothing here is fatal:
/// a failed operation leaves the store exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No record with id {0:?}")]
    NotFound(String),
}

/// Errors returned by the placeholder `/api` surface. Every mutating
/// endpoint answers `NotImplemented` until a real backend is wired in,
/// and callers treat that as the normal path today.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} is not connected yet")]
    NotImplemented(&'static str),

    #[error("{0}")]
    BadRequest(String),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
