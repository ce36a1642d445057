use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single chat line. Records are never updated once written, so
/// `updated_at` always equals `created_at`.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
	pub id: Uuid,
	pub content: String,
	pub owner: Owner,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl Message {
	/// Stamps a fresh identifier and the current time onto `content`.
	pub fn new(
		content: impl Into<String>,
		owner: Owner,
	) -> Self {
		let now = Utc::now();
		Self {
			id: Uuid::new_v4(),
			content: content.into(),
			owner,
			created_at: now,
			updated_at: now,
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Owner {
	User,
	System,
}

impl Owner {
	pub fn as_str(&self) -> &'static str {
		match self {
			Owner::User => "User",
			Owner::System => "System",
		}
	}
}

impl Display for Owner {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownOwner(pub String);

impl FromStr for Owner {
	type Err = UnknownOwner;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"User" => Ok(Owner::User),
			"System" => Ok(Owner::System),
			other => Err(UnknownOwner(other.to_string())),
		}
	}
}
