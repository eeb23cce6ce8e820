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


use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{Config, WEBHOOK_URL_ENV};

impl Config {
	/// Load configuration from the system-wide config file, falling back to
	/// defaults when it does not exist yet
	pub fn load() -> Result<Self> {
		let mut config = Self::load_file_only()?;

		// Environment variables take precedence over config file values
		config.apply_env_overrides();

		Ok(config)
	}

	/// Same as `load` without environment overrides; use this before `save`
	pub fn load_file_only() -> Result<Self> {
		let config_path = crate::directories::get_config_file_path()?;

		let config = if config_path.exists() {
			let config = Self::read_from_path(&config_path)?;

			if let Err(e) = config.validate() {
				eprintln!("Configuration validation warning: {}", e);
				eprintln!("The application will continue, but you may want to fix these issues.");
			}

			config
		} else {
			Config {
				config_path: Some(config_path),
				..Default::default()
			}
		};

		Ok(config)
	}

	/// Load configuration from a specific file path
	pub fn load_from_path(path: &Path) -> Result<Self> {
		let config = Self::read_from_path(path)?;
		config.validate()?;
		Ok(config)
	}

	fn read_from_path(path: &Path) -> Result<Self> {
		let config_str = fs::read_to_string(path)
			.context(format!("Failed to read config from {}", path.display()))?;
		let mut config: Config =
			toml::from_str(&config_str).context("Failed to parse TOML configuration")?;

		// Store the config path for future saves
		config.config_path = Some(path.to_path_buf());

		Ok(config)
	}

	pub fn apply_env_overrides(&mut self) {
		if let Ok(url) = std::env::var(WEBHOOK_URL_ENV) {
			if !url.trim().is_empty() {
				self.set_webhook_url(Some(url));
			}
		}
	}

	/// Save configuration to the file it was loaded from (or the system-wide default)
	pub fn save(&self) -> Result<()> {
		let config_path = if let Some(path) = &self.config_path {
			path.clone()
		} else {
			crate::directories::get_config_file_path()?
		};

		self.save_to_path(&config_path)
	}

	/// Save configuration to a specific file path
	pub fn save_to_path(&self, path: &Path) -> Result<()> {
		// Validate before saving
		self.validate()?;

		// Ensure the parent directory exists
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).context(format!(
				"Failed to create config directory: {}",
				parent.display()
			))?;
		}

		let config_str =
			toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

		fs::write(path, config_str)
			.context(format!("Failed to write config to {}", path.display()))?;

		Ok(())
	}

	pub fn create_default_config() -> Result<std::path::PathBuf> {
		let config_path = crate::directories::get_config_file_path()?;

		if !config_path.exists() {
			Config::default().save_to_path(&config_path)?;
			println!("Created default configuration at {}", config_path.display());
		}

		Ok(config_path)
	}
}
