// Copyright 2025 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


// Session module: conversation state for one interactive chat

pub mod chat; // Interactive chat loop, commands and rendering
mod chat_helper; // Chat command completion

use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
	User,
	Assistant,
}

impl Role {
	pub fn as_str(&self) -> &'static str {
		match self {
			Role::User => "user",
			Role::Assistant => "assistant",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One message of the transcript. Fields are private so a turn cannot be
/// edited once it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
	role: Role,
	content: String,
	is_error: bool,
}

impl Turn {
	pub fn role(&self) -> Role {
		self.role
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	/// Assistant turn that carries an Http or Connection error description
	pub fn is_error(&self) -> bool {
		self.is_error
	}
}

/// In-memory conversation: a lazily generated session id plus an append-only
/// transcript. Nothing here is ever written to disk.
#[derive(Debug, Default)]
pub struct Session {
	session_id: Option<String>,
	transcript: Vec<Turn>,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stable id for this session, generated (UUID v4) on first access
	pub fn get_or_create_session_id(&mut self) -> &str {
		self.session_id
			.get_or_insert_with(|| Uuid::new_v4().to_string())
			.as_str()
	}

	/// Id if one was handed out already
	pub fn session_id(&self) -> Option<&str> {
		self.session_id.as_deref()
	}

	pub fn append_turn(&mut self, role: Role, content: impl Into<String>) {
		self.transcript.push(Turn {
			role,
			content: content.into(),
			is_error: false,
		});
	}

	/// Assistant turn for a failed exchange, so replays can style it as an error
	pub fn append_error_turn(&mut self, content: impl Into<String>) {
		self.transcript.push(Turn {
			role: Role::Assistant,
			content: content.into(),
			is_error: true,
		});
	}

	pub fn transcript(&self) -> &[Turn] {
		&self.transcript
	}

	pub fn len(&self) -> usize {
		self.transcript.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transcript.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_session_id_is_stable() {
		let mut session = Session::new();
		assert_eq!(session.session_id(), None);

		let first = session.get_or_create_session_id().to_string();
		let second = session.get_or_create_session_id().to_string();
		assert_eq!(first, second);
		assert_eq!(session.session_id(), Some(first.as_str()));
		assert!(Uuid::parse_str(&first).is_ok());
	}

	#[test]
	fn test_session_ids_differ_across_sessions() {
		let mut a = Session::new();
		let mut b = Session::new();
		assert_ne!(a.get_or_create_session_id(), b.get_or_create_session_id());
	}

	#[test]
	fn test_transcript_keeps_order() {
		let mut session = Session::new();
		session.append_turn(Role::User, "hello");
		session.append_turn(Role::Assistant, "hi there");
		session.append_turn(Role::User, "bye");

		let roles: Vec<Role> = session.transcript().iter().map(Turn::role).collect();
		assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
		assert_eq!(session.transcript()[1].content(), "hi there");
		assert_eq!(session.len(), 3);
	}

	#[test]
	fn test_error_turns_are_flagged() {
		let mut session = Session::new();
		session.append_turn(Role::User, "q1");
		session.append_error_turn("Error: 500 - boom");
		session.append_turn(Role::User, "q2");
		session.append_turn(Role::Assistant, "a2");

		let turns = session.transcript();
		assert_eq!(turns[1].role(), Role::Assistant);
		assert_eq!(turns[1].content(), "Error: 500 - boom");
		assert!(turns[1].is_error());
		assert!(!turns[0].is_error());
		assert!(!turns[3].is_error());
	}

	#[test]
	fn test_role_names() {
		assert_eq!(Role::User.to_string(), "user");
		assert_eq!(Role::Assistant.as_str(), "assistant");
	}
}
