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

use hookchat::config::{validate_webhook_url, Config, LogLevel, WEBHOOK_URL_ENV};
use hookchat::directories;

#[derive(Args, Debug)]
pub struct ConfigArgs {
	/// Set the webhook URL (an n8n Webhook node accepting POST)
	#[arg(long)]
	pub webhook_url: Option<String>,

	/// Remove the saved webhook URL
	#[arg(long, conflicts_with = "webhook_url")]
	pub clear_webhook_url: bool,

	/// Set the request timeout in seconds
	#[arg(long)]
	pub timeout: Option<u64>,

	/// Set log level (none, info, debug)
	#[arg(long)]
	pub log_level: Option<String>,

	/// Enable or disable markdown rendering for replies
	#[arg(long)]
	pub markdown_enable: Option<bool>,

	/// Show current configuration values
	#[arg(long)]
	pub show: bool,

	/// Validate configuration without making changes
	#[arg(long)]
	pub validate: bool,
}

// Handle the configuration command
pub fn execute(args: &ConfigArgs, mut config: Config) -> Result<(), anyhow::Error> {
	if args.show {
		show_configuration(&config)?;
		return Ok(());
	}

	if args.validate {
		return match config.validate() {
			Ok(()) => {
				println!("✅ Configuration is valid!");
				Ok(())
			}
			Err(e) => {
				eprintln!("❌ Configuration validation failed: {}", e);
				Err(e)
			}
		};
	}

	let mut modified = false;

	if let Some(url) = &args.webhook_url {
		validate_webhook_url(url)?;
		config.set_webhook_url(Some(url.clone()));
		println!("Set webhook URL to {}", url.trim());
		modified = true;
	}

	if args.clear_webhook_url {
		config.set_webhook_url(None);
		println!("Removed webhook URL");
		modified = true;
	}

	if let Some(timeout) = args.timeout {
		config.webhook.timeout_seconds = timeout;
		println!("Set request timeout to {}s", timeout);
		modified = true;
	}

	if let Some(log_level_str) = &args.log_level {
		let level: LogLevel = log_level_str.parse()?;
		println!("Set log level to {}", level.as_str());
		config.log_level = level;
		modified = true;
	}

	if let Some(enable_markdown) = args.markdown_enable {
		config.enable_markdown_rendering = enable_markdown;
		println!(
			"Markdown rendering {}",
			if enable_markdown { "enabled" } else { "disabled" }
		);
		modified = true;
	}

	if modified {
		config.save()?;
		println!("Configuration saved successfully");
	} else {
		let config_path = Config::create_default_config()?;
		println!("Configuration file: {}", config_path.display());
		println!("Use --show to display current values or --help for options.");
	}

	Ok(())
}

fn show_configuration(config: &Config) -> Result<(), anyhow::Error> {
	println!("🔧 hookchat configuration\n");

	let config_path = directories::get_config_file_path()?;
	if config_path.exists() {
		println!("📁 Config file: {}", config_path.display());
	} else {
		println!("📁 Config file: {} (not created yet)", config_path.display());
	}
	println!();

	println!("🌍 Settings");
	println!("  Log level:                 {}", config.log_level.as_str());
	println!(
		"  Markdown rendering:        {}",
		if config.enable_markdown_rendering { "enabled" } else { "disabled" }
	);
	println!();

	println!("🔗 Webhook");
	println!(
		"  URL:                       {}",
		config.webhook_url().unwrap_or("not configured")
	);
	println!("  Timeout:                   {}s", config.webhook.timeout_seconds);
	if std::env::var(WEBHOOK_URL_ENV).is_ok() {
		println!("  ({} is set and overrides the URL at chat time)", WEBHOOK_URL_ENV);
	}

	Ok(())
}
