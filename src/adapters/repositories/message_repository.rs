use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::{
	domain::message::{Message, Owner},
	services::response::StorageError,
};

use super::{ensure_storable, MessageStore};

#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
	id: Uuid,
	content: String,
	owner: String,
	created_at: DateTime<Utc>,
	updated_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
	type Error = StorageError;
	fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
		let owner = row.owner.parse::<Owner>().map_err(|err| StorageError::CorruptRow {
			id: row.id.to_string(),
			reason: format!("unknown owner `{}`", err.0),
		})?;
		Ok(Message {
			id: row.id,
			content: row.content,
			owner,
			created_at: row.created_at,
			updated_at: row.updated_at,
		})
	}
}

/// Postgres-backed store over the `messages` table.
#[derive(Clone, Debug)]
pub struct PgMessageStore {
	pool: PgPool,
}

impl PgMessageStore {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl MessageStore for PgMessageStore {
	async fn insert_batch(
		&self,
		entries: Vec<(String, Owner)>,
	) -> Result<Vec<Message>, StorageError> {
		ensure_storable(&entries)?;
		let mut trx = self.pool.begin().await?;

		let mut stored = Vec::with_capacity(entries.len());
		for (content, owner) in entries {
			let message = Message::new(content, owner);
			let row = sqlx::query_as::<_, MessageRow>(
				r#"
				INSERT INTO messages (id, content, owner, created_at, updated_at)
				VALUES ($1, $2, $3, $4, $5)
				RETURNING id, content, owner, created_at, updated_at
				"#,
			)
			.bind(message.id)
			.bind(&message.content)
			.bind(message.owner.as_str())
			.bind(message.created_at)
			.bind(message.updated_at)
			.fetch_one(&mut *trx)
			.await?;
			stored.push(Message::try_from(row)?);
		}

		trx.commit().await.map_err(|err| {
			tracing::error!("Error occurred during commit operation : {:?}", err);
			err
		})?;
		Ok(stored)
	}

	async fn list_all(&self) -> Result<Vec<Message>, StorageError> {
		let rows = sqlx::query_as::<_, MessageRow>(
			r#"
			SELECT id, content, owner, created_at, updated_at
			FROM messages
			ORDER BY created_at ASC, seq ASC
			"#,
		)
		.fetch_all(&self.pool)
		.await?;

		rows.into_iter().map(Message::try_from).collect()
	}

	async fn delete_all(&self) -> Result<u64, StorageError> {
		let mut trx = self.pool.begin().await?;

		// Writers block until the truncate commits, so the count stays exact.
		sqlx::query("LOCK TABLE messages IN ACCESS EXCLUSIVE MODE").execute(&mut *trx).await?;
		let removed = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages").fetch_one(&mut *trx).await?;
		sqlx::query("TRUNCATE TABLE messages RESTART IDENTITY").execute(&mut *trx).await?;

		trx.commit().await?;
		Ok(removed.max(0) as u64)
	}
}
