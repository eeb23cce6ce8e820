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


use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub mod loading;
pub mod validation;

pub use validation::validate_webhook_url;

/// Environment variable that overrides the webhook URL from the config file
pub const WEBHOOK_URL_ENV: &str = "HOOKCHAT_WEBHOOK_URL";

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config_serialization() {
		let config = Config::default();
		let toml_str = toml::to_string(&config).unwrap();

		assert!(toml_str.contains("log_level = \"none\""));
		assert!(toml_str.contains("[webhook]"));
		assert!(toml_str.contains("timeout_seconds = 120"));
		// Unset URL must not be written as an empty string
		assert!(!toml_str.contains("url"), "unexpected url in: {}", toml_str);
	}

	#[test]
	fn test_partial_toml_uses_defaults() {
		let config: Config = toml::from_str("[webhook]\nurl = \"https://n8n.example.com/webhook/abc\"\n").unwrap();

		assert_eq!(config.webhook_url(), Some("https://n8n.example.com/webhook/abc"));
		assert_eq!(config.webhook.timeout_seconds, 120);
		assert_eq!(config.log_level, LogLevel::None);
		assert!(config.enable_markdown_rendering);
	}

	#[test]
	fn test_blank_url_counts_as_missing() {
		let mut config = Config::default();
		config.set_webhook_url(Some("   ".to_string()));
		assert_eq!(config.webhook_url(), None);

		config.set_webhook_url(Some(" http://localhost:5678/webhook/x ".to_string()));
		assert_eq!(config.webhook_url(), Some("http://localhost:5678/webhook/x"));

		config.set_webhook_url(None);
		assert_eq!(config.webhook_url(), None);
	}

	#[test]
	fn test_log_level_parsing() {
		assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
		assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
		assert_eq!("none".parse::<LogLevel>().unwrap(), LogLevel::None);
		assert!("verbose".parse::<LogLevel>().is_err());
		assert!(LogLevel::Debug.is_info_enabled());
		assert!(!LogLevel::Info.is_debug_enabled());
	}

	#[test]
	fn test_thread_config_drives_log_level() {
		let config = Config {
			log_level: LogLevel::Debug,
			..Default::default()
		};
		set_thread_config(&config);
		assert_eq!(
			with_thread_config(|c| c.get_log_level().is_debug_enabled()),
			Some(true)
		);
	}
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub enum LogLevel {
	#[serde(rename = "none")]
	#[default]
	None,
	#[serde(rename = "info")]
	Info,
	#[serde(rename = "debug")]
	Debug,
}

impl LogLevel {
	/// Check if info logging is enabled
	pub fn is_info_enabled(&self) -> bool {
		matches!(self, LogLevel::Info | LogLevel::Debug)
	}

	/// Check if debug logging is enabled
	pub fn is_debug_enabled(&self) -> bool {
		matches!(self, LogLevel::Debug)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::None => "none",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
		}
	}
}

impl FromStr for LogLevel {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"none" => Ok(LogLevel::None),
			"info" => Ok(LogLevel::Info),
			"debug" => Ok(LogLevel::Debug),
			other => Err(anyhow::anyhow!(
				"Invalid log level '{}'. Valid options: none, info, debug",
				other
			)),
		}
	}
}

fn default_timeout_seconds() -> u64 {
	120 // Workflows can be slow; n8n itself times out long before this
}

fn default_markdown_rendering() -> bool {
	true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WebhookConfig {
	// Destination of every chat turn (an n8n Webhook node with POST enabled)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(default = "default_timeout_seconds")]
	pub timeout_seconds: u64,
}

impl Default for WebhookConfig {
	fn default() -> Self {
		Self {
			url: None,
			timeout_seconds: default_timeout_seconds(),
		}
	}
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
	#[serde(default)]
	pub log_level: LogLevel,

	// Render assistant replies through termimad when they look like markdown
	#[serde(default = "default_markdown_rendering")]
	pub enable_markdown_rendering: bool,

	#[serde(default)]
	pub webhook: WebhookConfig,

	#[serde(skip)]
	config_path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: LogLevel::default(),
			enable_markdown_rendering: default_markdown_rendering(),
			webhook: WebhookConfig::default(),
			config_path: None,
		}
	}
}

impl Config {
	/// Configured webhook URL; blank values count as not configured
	pub fn webhook_url(&self) -> Option<&str> {
		self.webhook
			.url
			.as_deref()
			.map(str::trim)
			.filter(|url| !url.is_empty())
	}

	pub fn set_webhook_url(&mut self, url: Option<String>) {
		self.webhook.url = url
			.map(|u| u.trim().to_string())
			.filter(|u| !u.is_empty());
	}

	pub fn request_timeout(&self) -> Duration {
		Duration::from_secs(self.webhook.timeout_seconds)
	}

	/// Get the global log level
	pub fn get_log_level(&self) -> LogLevel {
		self.log_level.clone()
	}

	pub fn config_path(&self) -> Option<&PathBuf> {
		self.config_path.as_ref()
	}
}

// Logging macros for different log levels
// These macros automatically check the current log level and only print if appropriate

thread_local! {
	static CURRENT_CONFIG: RefCell<Option<Config>> = const { RefCell::new(None) };
}

/// Set the current config for the thread (to be used by logging macros)
pub fn set_thread_config(config: &Config) {
	CURRENT_CONFIG.with(|c| {
		*c.borrow_mut() = Some(config.clone());
	});
}

/// Get the current config for the thread
pub fn with_thread_config<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&Config) -> R,
{
	CURRENT_CONFIG.with(|c| (*c.borrow()).as_ref().map(f))
}

/// Info logging macro with automatic cyan coloring
/// Shows info messages when log level is Info OR Debug
#[macro_export]
macro_rules! log_info {
	($fmt:expr) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_info_enabled()) {
		if should_log {
		use colored::Colorize;
		println!("{}", $fmt.cyan());
		}
		}
	};
	($fmt:expr, $($arg:expr),* $(,)?) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_info_enabled()) {
		if should_log {
		use colored::Colorize;
	println!("{}", format!($fmt, $($arg),*).cyan());
	}
	}
	};
}

/// Debug logging macro with automatic bright blue coloring
#[macro_export]
macro_rules! log_debug {
	($fmt:expr) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_debug_enabled()) {
		if should_log {
		use colored::Colorize;
		println!("{}", $fmt.bright_blue());
		}
		}
	};
	($fmt:expr, $($arg:expr),* $(,)?) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_debug_enabled()) {
		if should_log {
		use colored::Colorize;
	println!("{}", format!($fmt, $($arg),*).bright_blue());
	}
	}
	};
}

/// Error logging macro with automatic bright red coloring
/// Always visible regardless of log level (errors should always be shown)
#[macro_export]
macro_rules! log_error {
	($fmt:expr) => {{
		use colored::Colorize;
		eprintln!("{}", $fmt.bright_red());
		}};
	($fmt:expr, $($arg:expr),* $(,)?) => {{
		use colored::Colorize;
		eprintln!("{}", format!($fmt, $($arg),*).bright_red());
		}};
}
