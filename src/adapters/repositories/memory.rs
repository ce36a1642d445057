use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
	domain::message::{Message, Owner},
	services::response::StorageError,
};

use super::{ensure_storable, MessageStore};

/// Process-local store. Contents vanish with the process; used for local runs
/// without Postgres and throughout the test suite.
#[derive(Default)]
pub struct InMemoryMessageStore {
	messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageStore {
	pub fn new() -> Self {
		Default::default()
	}
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
	async fn insert_batch(
		&self,
		entries: Vec<(String, Owner)>,
	) -> Result<Vec<Message>, StorageError> {
		ensure_storable(&entries)?;
		let stored: Vec<Message> = entries.into_iter().map(|(content, owner)| Message::new(content, owner)).collect();

		self.messages.write().await.extend(stored.iter().cloned());
		Ok(stored)
	}

	async fn list_all(&self) -> Result<Vec<Message>, StorageError> {
		let mut messages = self.messages.read().await.clone();
		// stable sort keeps insertion order among equal timestamps
		messages.sort_by_key(|message| message.created_at);
		Ok(messages)
	}

	async fn delete_all(&self) -> Result<u64, StorageError> {
		let removed = std::mem::take(&mut *self.messages.write().await);
		Ok(removed.len() as u64)
	}
}
