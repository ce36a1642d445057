use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::{
	config::{DatabaseConfig, DatabaseTarget},
	services::response::StorageError,
};

/// Opens a pool against the configured Postgres and brings the schema up to
/// date. Migrations are embedded at compile time from `./migrations`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StorageError> {
	let options = match &config.target {
		DatabaseTarget::Url(url) => PgConnectOptions::from_str(url)?,
		DatabaseTarget::Params {
			host,
			port,
			user,
			password,
			name,
		} => PgConnectOptions::new().host(host).port(*port).username(user).password(password).database(name),
	};

	let pool = PgPoolOptions::new()
		.max_connections(config.max_connections)
		.acquire_timeout(config.acquire_timeout)
		.connect_with(options)
		.await?;
	tracing::info!("Database connected successfully");

	sqlx::migrate!("./migrations").run(&pool).await?;
	tracing::info!("Database synchronized");

	Ok(pool)
}
