// Session display functionality

use super::core::ChatSession;
use crate::session::chat::assistant_output::{
	print_assistant_error, print_assistant_response, print_user_message,
};
use crate::session::chat::HELP_COMMAND;
use crate::session::Role;
use colored::*;

pub const CHAT_TITLE: &str = "n8n Chat Agent";

impl ChatSession {
	// Startup banner: title, destination or a standing warning, help hint
	pub fn print_banner(&self) {
		println!("{}", format!("🤖 hookchat · {}", CHAT_TITLE).bright_cyan().bold());
		match self.webhook_url() {
			Some(url) => println!("{} {}", "Webhook:".blue(), url.white()),
			None => self.print_configuration_warning(),
		}
		println!("Type {} for available commands.", HELP_COMMAND.cyan());
		println!();
	}

	pub fn print_configuration_warning(&self) {
		println!(
			"{}",
			"⚠️  Please enter your n8n Webhook URL to start chatting.".bright_yellow()
		);
		println!(
			"{}",
			"   Use /url <URL> for this session or `hookchat config --webhook-url <URL>` to save it."
				.yellow()
		);
	}

	// Display information about the current session
	pub fn display_session_info(&self) {
		println!("{}", "───────────── Session Information ─────────────".bright_cyan());
		println!(
			"{} {}",
			"Session id:".yellow(),
			self.session
				.session_id()
				.unwrap_or("(assigned on first message)")
				.bright_white()
		);
		println!(
			"{} {}",
			"Webhook:".yellow(),
			self.webhook_url().unwrap_or("not configured").bright_white()
		);
		println!(
			"{} {}s",
			"Timeout:".yellow(),
			self.config.webhook.timeout_seconds
		);

		let exchanges = self
			.session
			.transcript()
			.iter()
			.filter(|turn| turn.role() == Role::User)
			.count();
		println!(
			"{} {} ({} turns)",
			"Messages:".yellow(),
			exchanges,
			self.session.len()
		);
		println!("{}", "───────────────────────────────────────────────".bright_cyan());
	}

	// Re-render the whole transcript in order
	pub fn print_history(&self) {
		if self.session.is_empty() {
			println!("{}", "No messages yet.".bright_black());
			return;
		}

		for turn in self.session.transcript() {
			match turn.role() {
				Role::User => print_user_message(turn.content()),
				Role::Assistant if turn.is_error() => print_assistant_error(turn.content()),
				Role::Assistant => print_assistant_response(turn.content(), &self.config),
			}
		}
	}
}
