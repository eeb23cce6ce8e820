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


// HTTP client for the webhook collaborator

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;

use super::{normalize, NormalizedResult, WebhookError};
use crate::log_debug;

/// Body posted to the webhook for every user turn.
/// Field names follow the n8n chat trigger conventions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundPayload<'a> {
	pub chat_input: &'a str,
	pub session_id: &'a str,
}

impl<'a> OutboundPayload<'a> {
	pub fn new(chat_input: &'a str, session_id: &'a str) -> Self {
		Self {
			chat_input,
			session_id,
		}
	}
}

/// Status and body exactly as the webhook returned them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
	pub status: u16,
	pub body: String,
}

/// Posts payloads to a single webhook destination
#[derive(Debug, Clone)]
pub struct WebhookClient {
	client: Client,
	url: String,
}

impl WebhookClient {
	pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.pool_idle_timeout(Duration::from_secs(90))
			.user_agent(concat!("hookchat/", env!("CARGO_PKG_VERSION")))
			.build()
			.context("Failed to create HTTP client")?;

		Ok(Self {
			client,
			url: url.into(),
		})
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	/// Send one payload. Any status counts as a response; only transport
	/// failures (including failing to read the body) become errors.
	pub async fn post(&self, payload: &OutboundPayload<'_>) -> Result<RawResponse, WebhookError> {
		log_debug!(
			"POST {} {}",
			self.url,
			serde_json::to_string(payload).unwrap_or_default()
		);

		let started = Instant::now();
		let response = self
			.client
			.post(&self.url)
			.json(payload)
			.send()
			.await
			.map_err(|e| transport_error(&e))?;

		let status = response.status().as_u16();
		let body = response.text().await.map_err(|e| transport_error(&e))?;

		log_debug!(
			"Webhook answered {} with {} bytes in {} ms",
			status,
			body.len(),
			started.elapsed().as_millis()
		);

		Ok(RawResponse { status, body })
	}

	/// Post and normalize in one go; never fails, errors come back as
	/// `NormalizedResult::Error`.
	pub async fn exchange(&self, payload: &OutboundPayload<'_>) -> NormalizedResult {
		match self.post(payload).await {
			Ok(raw) => normalize(raw.status, &raw.body),
			Err(err) => err.into(),
		}
	}
}

fn transport_error(err: &reqwest::Error) -> WebhookError {
	let class = if err.is_timeout() {
		"timeout"
	} else if err.is_connect() {
		"connect"
	} else if err.is_builder() {
		"request"
	} else if err.is_body() || err.is_decode() {
		"body"
	} else {
		"transport"
	};
	log_debug!("Webhook transport failure ({}): {:?}", class, err);
	WebhookError::from_transport(err)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_payload_wire_format() {
		let payload = OutboundPayload::new("Hello", "abc-123");
		let json = serde_json::to_value(&payload).unwrap();
		assert_eq!(
			json,
			serde_json::json!({"chatInput": "Hello", "sessionId": "abc-123"})
		);
	}

	#[test]
	fn test_client_keeps_url() {
		let client = WebhookClient::new("http://localhost:5678/webhook/chat", Duration::from_secs(5)).unwrap();
		assert_eq!(client.url(), "http://localhost:5678/webhook/chat");
	}

	#[tokio::test]
	async fn test_invalid_url_is_connection_error() {
		let client = WebhookClient::new("not a url", Duration::from_secs(5)).unwrap();
		let result = client.exchange(&OutboundPayload::new("hi", "sid")).await;
		assert!(result.is_error());
		assert!(result.content().starts_with("Connection Error: "));
	}
}
