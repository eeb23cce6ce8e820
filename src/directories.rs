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


// Directory utilities for cross-platform data directory management

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "hookchat";
const CONFIG_DIR_NAME: &str = "config";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the system-wide data directory for hookchat
///
/// - macOS / Linux: ~/.local/share/hookchat
/// - Windows: %LOCALAPPDATA%/hookchat
pub fn get_hookchat_data_dir() -> Result<PathBuf> {
	let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?;

	#[cfg(target_os = "windows")]
	let data_dir = match dirs::data_local_dir() {
		Some(dir) => dir.join(APP_DIR_NAME),
		None => home.join("AppData").join("Local").join(APP_DIR_NAME),
	};

	#[cfg(not(target_os = "windows"))]
	let data_dir = home.join(".local").join("share").join(APP_DIR_NAME);

	if !data_dir.exists() {
		fs::create_dir_all(&data_dir).context(format!(
			"Failed to create hookchat data directory: {}",
			data_dir.display()
		))?;
	}

	Ok(data_dir)
}

/// Get the default configuration file path, creating its directory
pub fn get_config_file_path() -> Result<PathBuf> {
	let config_path = config_file_path_in(&get_hookchat_data_dir()?);

	if let Some(config_dir) = config_path.parent() {
		if !config_dir.exists() {
			fs::create_dir_all(config_dir).context(format!(
				"Failed to create config directory: {}",
				config_dir.display()
			))?;
		}
	}

	Ok(config_path)
}

/// Where the config file lives inside a data directory (no filesystem access)
pub fn config_file_path_in(data_dir: &Path) -> PathBuf {
	data_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_config_file_path() {
		let data_dir = Path::new("/nonexistent/share").join(APP_DIR_NAME);
		let config_path = config_file_path_in(&data_dir);

		assert_eq!(
			config_path,
			PathBuf::from("/nonexistent/share/hookchat/config/config.toml")
		);
		assert!(!data_dir.exists());
	}
}
