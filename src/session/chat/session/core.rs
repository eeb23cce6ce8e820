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


// Chat session: conversation state plus the webhook it talks to

use crate::config::{validate_webhook_url, Config};
use crate::session::{Role, Session};
use crate::webhook::{NormalizedResult, OutboundPayload, WebhookClient, WebhookError};
use crate::{log_debug, log_info};
use anyhow::Result;

pub struct ChatSession {
	pub session: Session,
	pub config: Config,
	client: Option<WebhookClient>,
}

impl ChatSession {
	/// Create a session for the given configuration. A missing webhook URL is
	/// not an error here; sends are refused until one is set.
	pub fn new(config: Config) -> Result<Self> {
		let client = build_client(&config)?;

		Ok(Self {
			session: Session::new(),
			config,
			client,
		})
	}

	pub fn webhook_url(&self) -> Option<&str> {
		self.client.as_ref().map(WebhookClient::url)
	}

	pub fn is_configured(&self) -> bool {
		self.client.is_some()
	}

	/// Point this session at another destination (runtime only, the config
	/// file is left alone). `None` unsets it.
	pub fn set_webhook_url(&mut self, url: Option<String>) -> Result<()> {
		if let Some(url) = url.as_deref() {
			validate_webhook_url(url)?;
		}

		let mut config = self.config.clone();
		config.set_webhook_url(url);
		self.client = build_client(&config)?;
		self.config = config;

		log_info!(
			"Webhook destination: {}",
			self.webhook_url().unwrap_or("<not configured>")
		);
		Ok(())
	}

	/// Run one user turn against the webhook.
	///
	/// Without a destination nothing is recorded and `ConfigurationMissing` is
	/// returned. Otherwise exactly one user turn and one assistant turn are
	/// appended, and failures come back as `NormalizedResult::Error`.
	pub async fn submit_turn(&mut self, input: &str) -> Result<NormalizedResult, WebhookError> {
		let Some(client) = self.client.as_ref() else {
			return Err(WebhookError::ConfigurationMissing);
		};

		self.session.append_turn(Role::User, input);

		let session_id = self.session.get_or_create_session_id().to_string();
		let payload = OutboundPayload::new(input, &session_id);
		let result = client.exchange(&payload).await;

		if result.is_error() {
			log_debug!("Turn failed: {}", result.content());
		}

		if result.is_error() {
			self.session.append_error_turn(result.content());
		} else {
			self.session.append_turn(Role::Assistant, result.content());
		}
		Ok(result)
	}
}

fn build_client(config: &Config) -> Result<Option<WebhookClient>> {
	config
		.webhook_url()
		.map(|url| WebhookClient::new(url, config.request_timeout()))
		.transpose()
}
