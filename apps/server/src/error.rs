//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cm_core::services::ServiceError;
use serde_json::json;
use tracing::error;

/// JSON error envelope: `{ "error": <message> }`
pub(crate) struct ApiError {
	status: StatusCode,
	message: String,
}

impl ApiError {
	pub(crate) fn bad_request(message: impl Into<String>) -> Self {
		Self {
			status: StatusCode::BAD_REQUEST,
			message: message.into(),
		}
	}

	pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
		Self {
			status: StatusCode::UNAUTHORIZED,
			message: message.into(),
		}
	}

	/// Internal failures are logged server-side and surfaced without detail.
	pub(crate) fn internal() -> Self {
		Self {
			status: StatusCode::INTERNAL_SERVER_ERROR,
			message: "Internal server error".into(),
		}
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let status = match &err {
			ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
			ServiceError::NotFound(_) | ServiceError::MissingParent(_) => StatusCode::NOT_FOUND,
			ServiceError::Duplicate(_) => StatusCode::CONFLICT,
			ServiceError::Database(e) => {
				error!(error = %e, "Unexpected store failure");
				return Self::internal();
			}
		};
		Self {
			status,
			message: err.to_string(),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(json!({ "error": self.message }))).into_response()
	}
}
