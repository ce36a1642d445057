mod messages;

use axum::{routing::post, Router};

use crate::services::handlers::MessageService;

#[derive(Clone)]
pub struct AppState {
	pub messages: MessageService,
}

pub fn create_routes(state: AppState) -> Router {
	Router::new()
		.route(
			"/messages",
			post(messages::create_message).get(messages::list_messages).delete(messages::delete_messages),
		)
		.with_state(state)
}

#[cfg(test)]
mod test {
	use std::sync::Arc;

	use axum::{
		body::Body,
		http::{Method, Request, StatusCode},
		Router,
	};
	use serde_json::{json, Value};
	use tower::ServiceExt;

	use super::{create_routes, AppState};
	use crate::{
		adapters::repositories::InMemoryMessageStore,
		domain::message::AUTO_REPLY,
		services::handlers::{test::UnavailableStore, MessageService},
	};

	fn app() -> Router {
		create_routes(AppState {
			messages: MessageService::new(Arc::new(InMemoryMessageStore::new())),
		})
	}

	async fn call(
		app: &Router,
		method: Method,
		body: Option<&str>,
	) -> (StatusCode, Value) {
		let request = Request::builder().method(method).uri("/messages");
		let request = match body {
			Some(body) => request.header("content-type", "application/json").body(Body::from(body.to_string())),
			None => request.body(Body::empty()),
		}
		.unwrap();

		let response = app.clone().oneshot(request).await.unwrap();
		let status = response.status();
		let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
		(status, serde_json::from_slice(&bytes).unwrap())
	}

	#[tokio::test]
	async fn test_create_returns_user_message_and_auto_reply() {
		let app = app();
		let (status, body) = call(&app, Method::POST, Some(r#"{"content":"Olá"}"#)).await;

		assert_eq!(status, StatusCode::CREATED);
		assert_eq!(body["userMessage"]["content"], "Olá");
		assert_eq!(body["userMessage"]["owner"], "User");
		assert_eq!(body["systemMessage"]["owner"], "System");
		assert_eq!(body["systemMessage"]["content"], AUTO_REPLY);
		assert!(body["systemMessage"]["content"].as_str().unwrap().to_lowercase().contains("received"));
	}

	#[tokio::test]
	async fn test_create_rejects_empty_missing_and_malformed_content() {
		let app = app();
		for payload in [r#"{"content":""}"#, r#"{"content":"   "}"#, "{}", r#"{"content":5}"#, "not json"] {
			let (status, body) = call(&app, Method::POST, Some(payload)).await;
			assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
			assert_eq!(body, json!({ "error": "Content is required" }));
		}

		let (_, listed) = call(&app, Method::GET, None).await;
		assert_eq!(listed, json!([]));
	}

	#[tokio::test]
	async fn test_create_trims_content() {
		let app = app();
		let (status, body) = call(&app, Method::POST, Some(r#"{"content":"  Olá  "}"#)).await;

		assert_eq!(status, StatusCode::CREATED);
		assert_eq!(body["userMessage"]["content"], "Olá");
	}

	#[tokio::test]
	async fn test_list_on_empty_store() {
		let (status, body) = call(&app(), Method::GET, None).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!([]));
	}

	#[tokio::test]
	async fn test_list_returns_messages_in_creation_order() {
		'_given: {
			let app = app();
			for content in ["First", "Second", "Third"] {
				let (status, _) = call(&app, Method::POST, Some(&json!({ "content": content }).to_string())).await;
				assert_eq!(status, StatusCode::CREATED);
			}

			'_when: {
				let (status, body) = call(&app, Method::GET, None).await;

				'_then: {
					assert_eq!(status, StatusCode::OK);
					let messages = body.as_array().unwrap();
					let contents: Vec<&str> = messages.iter().map(|m| m["content"].as_str().unwrap()).collect();
					assert_eq!(contents, vec!["First", AUTO_REPLY, "Second", AUTO_REPLY, "Third", AUTO_REPLY]);

					for message in messages {
						for field in ["id", "content", "owner", "createdAt", "updatedAt"] {
							assert!(message.get(field).is_some(), "missing {field}");
						}
						assert_eq!(message["createdAt"], message["updatedAt"]);
					}
				}
			}
		}
	}

	#[tokio::test]
	async fn test_delete_clears_history() {
		let app = app();
		call(&app, Method::POST, Some(r#"{"content":"bye"}"#)).await;

		let (status, body) = call(&app, Method::DELETE, None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!({ "message": "All messages deleted successfully" }));

		let (_, listed) = call(&app, Method::GET, None).await;
		assert_eq!(listed, json!([]));

		let (status, _) = call(&app, Method::DELETE, None).await;
		assert_eq!(status, StatusCode::OK);
	}

	#[tokio::test]
	async fn test_storage_failure_is_hidden_from_client() {
		let app = create_routes(AppState {
			messages: MessageService::new(Arc::new(UnavailableStore)),
		});
		let internal = json!({ "error": "Internal server error" });

		let (status, body) = call(&app, Method::POST, Some(r#"{"content":"hi"}"#)).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body, internal);

		let (status, body) = call(&app, Method::GET, None).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body, internal);

		let (status, body) = call(&app, Method::DELETE, None).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body, internal);
	}
}
