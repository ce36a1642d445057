use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Browsers may reach the API from exactly one origin.
pub fn cors_layer(allow_origin: HeaderValue) -> CorsLayer {
	CorsLayer::new()
		.allow_origin(allow_origin)
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
		.allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
