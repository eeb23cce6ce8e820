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


// Webhook error kinds surfaced to the user as assistant content

use thiserror::Error;

/// Everything that can go wrong while exchanging a turn with the webhook.
///
/// The `Display` text of `Http` and `Connection` is exactly what ends up in
/// the transcript, so keep the formats stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
	/// No destination URL is configured; nothing is sent.
	#[error("Please configure the webhook URL (use /url <URL> or `hookchat config --webhook-url`).")]
	ConfigurationMissing,

	/// The webhook answered with a non-200 status.
	#[error("Error: {status} - {body}")]
	Http { status: u16, body: String },

	/// The request never produced a response (refused, timeout, DNS, TLS...).
	#[error("Connection Error: {0}")]
	Connection(String),
}

impl WebhookError {
	/// Build a connection error from a transport failure, walking the source chain
	/// so the user sees e.g. "error sending request: tcp connect error: Connection refused".
	pub fn from_transport(err: &reqwest::Error) -> Self {
		Self::Connection(describe_error_chain(err))
	}
}

pub(crate) fn describe_error_chain(err: &(dyn std::error::Error + 'static)) -> String {
	let mut parts = vec![err.to_string()];
	let mut source = err.source();
	while let Some(cause) = source {
		let text = cause.to_string();
		// hyper and reqwest often repeat the same message one level down
		if parts.last() != Some(&text) {
			parts.push(text);
		}
		source = cause.source();
	}
	parts.join(": ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Leaf;

	impl std::fmt::Display for Leaf {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "Connection refused")
		}
	}

	impl std::error::Error for Leaf {}

	#[derive(Debug)]
	struct Wrapper(Leaf);

	impl std::fmt::Display for Wrapper {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "tcp connect error")
		}
	}

	impl std::error::Error for Wrapper {
		fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
			Some(&self.0)
		}
	}

	#[test]
	fn test_http_error_display() {
		let err = WebhookError::Http {
			status: 500,
			body: "Internal Server Error".to_string(),
		};
		assert_eq!(err.to_string(), "Error: 500 - Internal Server Error");
	}

	#[test]
	fn test_connection_error_display() {
		let err = WebhookError::Connection("timed out".to_string());
		assert_eq!(err.to_string(), "Connection Error: timed out");
	}

	#[test]
	fn test_error_chain_is_joined() {
		let err = Wrapper(Leaf);
		assert_eq!(
			describe_error_chain(&err),
			"tcp connect error: Connection refused"
		);
	}
}
