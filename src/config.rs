use std::{net::SocketAddr, str::FromStr, time::Duration};

use axum::http::HeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("{key} has an invalid value `{value}`")]
	Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
	Postgres,
	Memory,
}

impl FromStr for StoreBackend {
	type Err = ();
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"postgres" | "postgresql" => Ok(Self::Postgres),
			"memory" => Ok(Self::Memory),
			_ => Err(()),
		}
	}
}

/// How to reach Postgres: either a full URL or discrete connection parameters.
#[derive(Debug, Clone)]
pub enum DatabaseTarget {
	Url(String),
	Params {
		host: String,
		port: u16,
		user: String,
		password: String,
		name: String,
	},
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
	pub target: DatabaseTarget,
	pub max_connections: u32,
	pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
	/// Which events we want to log when RUST_LOG is not set
	pub log_level: String,

	/// Address the server is listening to
	pub server_addr: SocketAddr,

	/// The single origin browsers may call us from
	pub allow_origin: HeaderValue,
	pub store_backend: StoreBackend,
	pub database: DatabaseConfig,
}

impl Config {
	pub fn new() -> Result<Config, ConfigError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the config from an arbitrary key lookup, so tests need not touch
	/// the process environment.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());

		let mut server_addr: SocketAddr = parse("SERVER_IP_PORT", lookup("SERVER_IP_PORT").unwrap_or("0.0.0.0:4000".into()))?;
		if let Some(port) = lookup("PORT") {
			server_addr.set_port(parse("PORT", port)?);
		}

		let allow_origin = lookup("ALLOW_ORIGIN").unwrap_or("http://localhost:3000".to_string());
		let allow_origin = HeaderValue::from_str(&allow_origin).map_err(|_| ConfigError::Invalid {
			key: "ALLOW_ORIGIN",
			value: allow_origin.clone(),
		})?;

		let store_backend = match lookup("STORE_BACKEND") {
			Some(value) => value.parse::<StoreBackend>().map_err(|_| ConfigError::Invalid {
				key: "STORE_BACKEND",
				value,
			})?,
			None => StoreBackend::Postgres,
		};

		let target = match lookup("DATABASE_URL") {
			Some(url) => DatabaseTarget::Url(url),
			None => DatabaseTarget::Params {
				host: lookup("DB_HOST").unwrap_or("localhost".into()),
				port: match lookup("DB_PORT") {
					Some(port) => parse("DB_PORT", port)?,
					None => 5432,
				},
				user: lookup("DB_USER").unwrap_or("postgres".into()),
				password: lookup("DB_PASSWORD").unwrap_or_default(),
				name: lookup("DB_NAME").unwrap_or("chat".into()),
			},
		};
		let max_connections = match lookup("DB_MAX_CONNECTIONS") {
			Some(value) => parse("DB_MAX_CONNECTIONS", value)?,
			None => 10,
		};
		let acquire_timeout = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
			Some(value) => Duration::from_secs(parse("DB_ACQUIRE_TIMEOUT_SECS", value)?),
			None => Duration::from_secs(5),
		};

		Ok(Config {
			log_level,
			server_addr,
			allow_origin,
			store_backend,
			database: DatabaseConfig {
				target,
				max_connections,
				acquire_timeout,
			},
		})
	}
}

fn parse<T: FromStr>(
	key: &'static str,
	value: String,
) -> Result<T, ConfigError> {
	value.parse::<T>().map_err(|_| ConfigError::Invalid { key, value })
}
