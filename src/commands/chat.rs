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


use clap::Args;

use hookchat::Config;

#[derive(Args, Debug, Default)]
pub struct ChatArgs {
	/// Webhook URL for this run (overrides config file and HOOKCHAT_WEBHOOK_URL)
	#[arg(long, short)]
	pub url: Option<String>,

	/// Request timeout in seconds
	#[arg(long)]
	pub timeout: Option<u64>,
}

impl ChatArgs {
	/// Apply command line overrides on top of the loaded configuration
	pub fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
		if let Some(url) = &self.url {
			hookchat::config::validate_webhook_url(url)?;
			config.set_webhook_url(Some(url.clone()));
		}
		if let Some(timeout) = self.timeout {
			config.webhook.timeout_seconds = timeout;
		}
		config.validate()
	}
}
