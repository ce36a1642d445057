use std::sync::Arc;

use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::{
	adapters::repositories::{InMemoryMessageStore, MessageStore, PgMessageStore},
	common::cors::cors_layer,
	config::{Config, StoreBackend},
	database,
	routes::{create_routes, AppState},
	services::{handlers::MessageService, response::StorageError},
};

#[derive(Debug, Error)]
pub enum StartupError {
	#[error("unable to connect to the database: {0}")]
	Storage(#[from] StorageError),

	#[error("server error: {0}")]
	Serve(String),
}

pub struct Bootstrap;
impl Bootstrap {
	/// Connects the configured store. Postgres gets its schema migrated here.
	pub async fn message_store(config: &Config) -> Result<Arc<dyn MessageStore>, StartupError> {
		let store: Arc<dyn MessageStore> = match config.store_backend {
			StoreBackend::Postgres => Arc::new(PgMessageStore::new(database::connect(&config.database).await?)),
			StoreBackend::Memory => {
				tracing::warn!("Using the in-memory store; messages are lost on restart");
				Arc::new(InMemoryMessageStore::new())
			}
		};
		Ok(store)
	}

	pub async fn app(config: &Config) -> Result<axum::Router, StartupError> {
		let state = AppState {
			messages: MessageService::new(Self::message_store(config).await?),
		};

		Ok(create_routes(state).layer(cors_layer(config.allow_origin.clone())).layer(TraceLayer::new_for_http()))
	}
}
