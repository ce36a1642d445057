use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised by a [`MessageStore`](crate::adapters::repositories::MessageStore).
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),

	#[error("migration error: {0}")]
	Migration(#[from] sqlx::migrate::MigrateError),

	/// Stored content must carry at least one non-whitespace character.
	#[error("refusing to store blank {owner} content")]
	BlankContent { owner: String },

	/// A row came back that no code path could have written.
	#[error("corrupt row {id}: {reason}")]
	CorruptRow { id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ServiceError {
	/// Client input was rejected. The message is safe to show to callers.
	#[error("{0}")]
	Validation(String),

	#[error(transparent)]
	Storage(#[from] StorageError),
}

impl ServiceError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
			ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let client_message = match &self {
			ServiceError::Validation(message) => message.clone(),
			ServiceError::Storage(err) => {
				tracing::error!(error = %err, "storage failure while serving request");
				"Internal server error".to_string()
			}
		};
		(self.status(), Json(json!({ "error": client_message }))).into_response()
	}
}

#[cfg(test)]
mod test {
	use axum::{http::StatusCode, response::IntoResponse};

	use super::{ServiceError, StorageError};

	#[tokio::test]
	async fn test_storage_errors_are_rendered_generically() {
		let err: ServiceError = StorageError::CorruptRow {
			id: "42".into(),
			reason: "owner `Admin`".into(),
		}
		.into();

		let response = err.into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

		let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
		let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
		assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
	}

	#[test]
	fn test_validation_maps_to_bad_request() {
		let err = ServiceError::Validation("Content is required".into());
		assert_eq!(err.status(), StatusCode::BAD_REQUEST);
		assert_eq!(err.to_string(), "Content is required");
	}
}
