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


use anyhow::{anyhow, Result};
use url::Url;

use super::Config;

impl Config {
	/// Validate the configuration for common issues
	pub fn validate(&self) -> Result<()> {
		if let Some(url) = self.webhook_url() {
			validate_webhook_url(url)?;
		}

		if self.webhook.timeout_seconds == 0 {
			return Err(anyhow!("webhook.timeout_seconds must be greater than 0"));
		}

		Ok(())
	}
}

/// Accept only absolute http(s) URLs with a host
pub fn validate_webhook_url(url: &str) -> Result<()> {
	let parsed = Url::parse(url.trim()).map_err(|e| anyhow!("Invalid webhook URL '{}': {}", url, e))?;

	match parsed.scheme() {
		"http" | "https" => {}
		scheme => {
			return Err(anyhow!(
				"Invalid webhook URL '{}': scheme '{}' is not supported, use http or https",
				url,
				scheme
			))
		}
	}

	if parsed.host_str().map_or(true, str::is_empty) {
		return Err(anyhow!("Invalid webhook URL '{}': missing host", url));
	}

	Ok(())
}
