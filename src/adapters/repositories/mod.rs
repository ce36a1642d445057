pub(crate) mod memory;
pub(crate) mod message_repository;

use async_trait::async_trait;

use crate::{
	domain::message::{Message, Owner},
	services::response::StorageError,
};

pub use memory::InMemoryMessageStore;
pub use message_repository::PgMessageStore;

/// Every store runs this before writing, so a blank record is refused the same
/// way whatever the backend.
pub(crate) fn ensure_storable(entries: &[(String, Owner)]) -> Result<(), StorageError> {
	match entries.iter().find(|(content, _)| content.trim().is_empty()) {
		Some((_, owner)) => Err(StorageError::BlankContent { owner: owner.to_string() }),
		None => Ok(()),
	}
}

/// Durable storage of [`Message`] records.
///
/// Implementations never retry; a failure is handed back once and the caller
/// decides what to do with it.
#[async_trait]
pub trait MessageStore: Send + Sync {
	/// Persists every entry as one atomic unit, in the given order. Either all
	/// records are stored or none is.
	async fn insert_batch(
		&self,
		entries: Vec<(String, Owner)>,
	) -> Result<Vec<Message>, StorageError>;

	/// All records, oldest first. Records sharing a timestamp come back in
	/// insertion order.
	async fn list_all(&self) -> Result<Vec<Message>, StorageError>;

	/// Removes every record and returns how many were removed.
	async fn delete_all(&self) -> Result<u64, StorageError>;

	async fn insert(
		&self,
		content: String,
		owner: Owner,
	) -> Result<Message, StorageError> {
		let mut stored = self.insert_batch(vec![(content, owner)]).await?;
		stored.pop().ok_or_else(|| StorageError::CorruptRow {
			id: String::new(),
			reason: "insert returned no row".to_string(),
		})
	}
}
