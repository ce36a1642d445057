use std::sync::Arc;

use crate::{
	adapters::repositories::MessageStore,
	domain::message::{Exchange, Message, Owner, AUTO_REPLY, CONTENT_REQUIRED},
};

use super::response::{ServiceError, StorageError};

/// Business rules on top of a [`MessageStore`]. Holds no per-request state,
/// so one instance is built at startup and cloned into every handler.
#[derive(Clone)]
pub struct MessageService {
	store: Arc<dyn MessageStore>,
}

impl MessageService {
	pub fn new(store: Arc<dyn MessageStore>) -> Self {
		Self { store }
	}

	/// Stores trimmed user content. Absent or blank content is rejected before
	/// the store is touched.
	pub async fn create_user_message(
		&self,
		raw_content: Option<&str>,
	) -> Result<Message, ServiceError> {
		let content = normalize_content(raw_content)?;
		let message = self.store.insert(content, Owner::User).await?;
		tracing::info!(id = %message.id, "user message stored");
		Ok(message)
	}

	/// System text is trusted and stored verbatim; only the store's blank-content
	/// rule applies.
	pub async fn create_system_message(
		&self,
		content: &str,
	) -> Result<Message, ServiceError> {
		let message = self.store.insert(content.to_string(), Owner::System).await?;
		tracing::info!(id = %message.id, "system message stored");
		Ok(message)
	}

	/// Stores the user message and its auto-reply as one atomic pair.
	pub async fn post_message(
		&self,
		raw_content: Option<&str>,
	) -> Result<Exchange, ServiceError> {
		let content = normalize_content(raw_content)?;

		let mut stored = self
			.store
			.insert_batch(vec![(content, Owner::User), (AUTO_REPLY.to_string(), Owner::System)])
			.await?
			.into_iter();

		match (stored.next(), stored.next()) {
			(Some(user_message), Some(system_message)) => {
				tracing::info!(user_message = %user_message.id, system_message = %system_message.id, "exchange stored");
				Ok(Exchange {
					user_message,
					system_message,
				})
			}
			_ => Err(StorageError::CorruptRow {
				id: String::new(),
				reason: "batch insert returned fewer rows than requested".to_string(),
			}
			.into()),
		}
	}

	pub async fn get_all_messages(&self) -> Result<Vec<Message>, ServiceError> {
		let messages = self.store.list_all().await?;
		tracing::debug!(count = messages.len(), "messages listed");
		Ok(messages)
	}

	pub async fn delete_all_messages(&self) -> Result<u64, ServiceError> {
		let removed = self.store.delete_all().await?;
		tracing::warn!(removed, "all messages deleted");
		Ok(removed)
	}
}

fn normalize_content(raw_content: Option<&str>) -> Result<String, ServiceError> {
	match raw_content.map(str::trim) {
		Some(content) if !content.is_empty() => Ok(content.to_string()),
		_ => Err(ServiceError::Validation(CONTENT_REQUIRED.to_string())),
	}
}
