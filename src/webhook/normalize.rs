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


// Response normalization: turn whatever the webhook sent back into one display string

use serde_json::{Map, Value};

use super::WebhookError;

/// Keys checked on a top-level JSON object, in priority order
pub const OBJECT_DISPLAY_KEYS: [&str; 3] = ["output", "text", "message"];

/// Keys checked on the first item of a JSON array, in priority order.
/// n8n returns a list of items when "Respond to Webhook" emits all items.
pub const ITEM_DISPLAY_KEYS: [&str; 2] = ["output", "text"];

/// Only this status is treated as success
pub const SUCCESS_STATUS: u16 = 200;

/// Outcome of a single webhook exchange, ready to be shown as assistant content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedResult {
	Text(String),
	Error(String),
}

impl NormalizedResult {
	/// The text that goes into the transcript, for both variants
	pub fn content(&self) -> &str {
		match self {
			Self::Text(text) | Self::Error(text) => text,
		}
	}

	pub fn is_error(&self) -> bool {
		matches!(self, Self::Error(_))
	}
}

impl From<WebhookError> for NormalizedResult {
	fn from(err: WebhookError) -> Self {
		Self::Error(err.to_string())
	}
}

/// Map a raw HTTP outcome to a display result.
///
/// Precedence is fixed: status gate, then JSON parse attempt, then object key
/// lookup, then list-head unwrapping, then plain stringification.
pub fn normalize(status_code: u16, raw_body: &str) -> NormalizedResult {
	if status_code != SUCCESS_STATUS {
		return WebhookError::Http {
			status: status_code,
			body: raw_body.to_string(),
		}
		.into();
	}

	match serde_json::from_str::<Value>(raw_body) {
		Ok(value) => NormalizedResult::Text(extract_display_text(&value)),
		Err(_) => NormalizedResult::Text(raw_body.to_string()),
	}
}

/// Pick the display text out of an already parsed JSON body
pub fn extract_display_text(value: &Value) -> String {
	match value {
		Value::Object(map) => {
			lookup_display_key(map, &OBJECT_DISPLAY_KEYS).unwrap_or_else(|| stringify(value))
		}
		Value::Array(items) => match items.first() {
			Some(Value::Object(item)) => lookup_display_key(item, &ITEM_DISPLAY_KEYS)
				.unwrap_or_else(|| stringify(&items[0])),
			Some(item) => stringify(item),
			None => stringify(value),
		},
		_ => stringify(value),
	}
}

/// Return the string form of the first key from `keys` present in `map`.
/// A present key wins even when its value is null or empty.
pub fn lookup_display_key(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
	keys.iter()
		.find_map(|key| map.get(*key))
		.map(stringify)
}

/// String form of a JSON value: strings lose their quotes, everything else is
/// compact JSON.
pub fn stringify(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
