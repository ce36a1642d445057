// domain for the chat feature
pub mod entity;
pub mod schemas;

pub use entity::{Message, Owner};
pub use schemas::{CreateMessage, Exchange, Notice};

/// Acknowledgment stored after every accepted user message.
pub const AUTO_REPLY: &str = "Message received successfully!";

pub const CONTENT_REQUIRED: &str = "Content is required";
