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


// Session command processing

use super::super::commands::*;
use super::core::ChatSession;
use crate::config::{set_thread_config, LogLevel};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

impl ChatSession {
	// Process a slash command. Returns true when the session should end.
	// Commands never touch the transcript.
	pub fn process_command(&mut self, input: &str) -> Result<bool> {
		let input_parts: Vec<&str> = input.split_whitespace().collect();
		let Some(&command) = input_parts.first() else {
			return Ok(false);
		};
		let params = &input_parts[1..];

		match command {
			EXIT_COMMAND | QUIT_COMMAND => {
				println!("{}", "Ending session. Goodbye!".bright_green());
				return Ok(true);
			}
			HELP_COMMAND => print_help(),
			URL_COMMAND => self.handle_url_command(params),
			SESSION_COMMAND => self.display_session_info(),
			HISTORY_COMMAND => self.print_history(),
			CLEAR_COMMAND => {
				// ANSI escape code to clear screen and move cursor to top-left
				print!("\x1B[2J\x1B[1;1H");
				io::stdout().flush()?;
			}
			LOGLEVEL_COMMAND => self.handle_loglevel_command(params),
			_ => {
				println!(
					"{} {}. Type {} for available commands.",
					"Unknown command:".bright_red(),
					command,
					HELP_COMMAND.cyan()
				);
			}
		}

		Ok(false)
	}

	fn handle_url_command(&mut self, params: &[&str]) {
		match params {
			[] => match self.webhook_url() {
				Some(url) => println!("{} {}", "Webhook:".blue(), url.white()),
				None => self.print_configuration_warning(),
			},
			[url] => match self.set_webhook_url(Some(url.to_string())) {
				Ok(()) => println!("{} {}", "✓ Webhook set to".bright_green(), url.white()),
				Err(e) => println!("{}: {}", "Webhook URL not changed".bright_red(), e),
			},
			_ => println!("{} {} <URL>", "Usage:".yellow(), URL_COMMAND),
		}
	}

	fn handle_loglevel_command(&mut self, params: &[&str]) {
		let Some(level) = params.first() else {
			println!(
				"{} {}",
				"Current log level:".blue(),
				self.config.log_level.as_str().white()
			);
			return;
		};

		match level.parse::<LogLevel>() {
			Ok(level) => {
				self.config.log_level = level;
				// Logging macros read the thread-local copy
				set_thread_config(&self.config);
				println!(
					"{} {}",
					"Log level set to".bright_green(),
					self.config.log_level.as_str()
				);
			}
			Err(e) => println!("{}", e.to_string().bright_red()),
		}
	}
}

fn print_help() {
	println!("{}", "\nAvailable commands:\n".bright_cyan());
	println!("{} - Show this help message", HELP_COMMAND.cyan());
	println!("{} [URL] - Show or set the webhook URL for this session", URL_COMMAND.cyan());
	println!("{} - Show the session id and message count", SESSION_COMMAND.cyan());
	println!("{} - Show the conversation so far", HISTORY_COMMAND.cyan());
	println!("{} - Clear the screen (history is kept)", CLEAR_COMMAND.cyan());
	println!("{} [level] - Set logging level: none, info, or debug", LOGLEVEL_COMMAND.cyan());
	println!("{} or {} - Exit the session", EXIT_COMMAND.cyan(), QUIT_COMMAND.cyan());
	println!();
}
