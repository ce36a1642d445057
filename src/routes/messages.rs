use axum::{
	extract::{rejection::JsonRejection, State},
	http::StatusCode,
	Json,
};
use axum_macros::debug_handler;

use crate::{
	domain::message::{CreateMessage, Exchange, Message, Notice},
	services::response::ServiceError,
};

use super::AppState;

/// POST /messages
#[debug_handler]
pub async fn create_message(
	State(state): State<AppState>,
	payload: Result<Json<CreateMessage>, JsonRejection>,
) -> Result<(StatusCode, Json<Exchange>), ServiceError> {
	// an unreadable body carries no usable content
	let payload = payload.map(|Json(body)| body).unwrap_or_else(|rejection| {
		tracing::debug!(%rejection, "create message payload rejected");
		CreateMessage::default()
	});

	let exchange = state.messages.post_message(payload.content.as_deref()).await?;
	Ok((StatusCode::CREATED, Json(exchange)))
}

/// GET /messages
#[debug_handler]
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ServiceError> {
	Ok(Json(state.messages.get_all_messages().await?))
}

/// DELETE /messages
#[debug_handler]
pub async fn delete_messages(State(state): State<AppState>) -> Result<Json<Notice>, ServiceError> {
	state.messages.delete_all_messages().await?;
	Ok(Json(Notice {
		message: "All messages deleted successfully",
	}))
}
