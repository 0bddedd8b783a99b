use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidUserId
            | CartError::InvalidSku
            | CartError::InvalidQuantity
            | CartError::CartEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::ProductNotFound | CartError::InsufficientStock { .. } => {
                (StatusCode::PRECONDITION_FAILED, "PreconditionFailed")
            }
            CartError::OrderFailed { .. } => (StatusCode::PRECONDITION_FAILED, "OrderFailed"),
            CartError::CartNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::DownstreamUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DownstreamError")
            }
            CartError::CartAlreadyExists => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
