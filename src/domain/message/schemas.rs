use serde::{Deserialize, Serialize};

use super::entity::Message;

/// Body of `POST /messages`. `content` stays optional so a missing field is
/// reported as a validation failure instead of a deserialization one.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessage {
	#[serde(default)]
	pub content: Option<String>,
}

/// The user message together with the auto-reply stored for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
	pub user_message: Message,
	pub system_message: Message,
}

#[derive(Debug, Serialize)]
pub struct Notice {
	pub message: &'static str,
}

#[test]
fn test_create_message_tolerates_missing_content() {
	let body = serde_json::from_str::<CreateMessage>("{}").unwrap();
	assert_eq!(body.content, None);

	let body = serde_json::from_str::<CreateMessage>(r#"{"content":"  hi "}"#).unwrap();
	assert_eq!(body.content.as_deref(), Some("  hi "));
}
