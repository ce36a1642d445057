use std::process::ExitCode;

use chat::{
	bootstrap::{Bootstrap, StartupError},
	dependencies::config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
	// ! Config
	let config = match config() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Invalid configuration: {err}");
			return ExitCode::FAILURE;
		}
	};

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	if let Err(err) = serve(config).await {
		tracing::error!("Unable to start the server: {}", err);
		return ExitCode::FAILURE;
	}
	ExitCode::SUCCESS
}

async fn serve(config: &chat::config::Config) -> Result<(), StartupError> {
	// ! Connection
	tracing::info!("Connections Are Being Pooled...");
	let app = Bootstrap::app(config).await?;

	tracing::info!("Server running on {}", config.server_addr);
	axum::Server::try_bind(&config.server_addr)
		.map_err(|err| StartupError::Serve(err.to_string()))?
		.serve(app.into_make_service())
		.with_graceful_shutdown(shutdown_signal())
		.await
		.map_err(|err| StartupError::Serve(err.to_string()))
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::error!("Unable to listen for shutdown signal: {}", err);
		std::future::pending::<()>().await;
	}
	tracing::info!("Shutting down");
}
