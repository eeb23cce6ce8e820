// Chat commands module

// Chat commands
pub const HELP_COMMAND: &str = "/help";
pub const EXIT_COMMAND: &str = "/exit";
pub const QUIT_COMMAND: &str = "/quit";
pub const URL_COMMAND: &str = "/url";
pub const SESSION_COMMAND: &str = "/session";
pub const HISTORY_COMMAND: &str = "/history";
pub const CLEAR_COMMAND: &str = "/clear";
pub const LOGLEVEL_COMMAND: &str = "/loglevel";

// List of all available commands for autocomplete
pub const COMMANDS: [&str; 8] = [
	HELP_COMMAND,
	EXIT_COMMAND,
	QUIT_COMMAND,
	URL_COMMAND,
	SESSION_COMMAND,
	HISTORY_COMMAND,
	CLEAR_COMMAND,
	LOGLEVEL_COMMAND,
];

// Only lines whose first word is a known command are handled locally;
// anything else, "/start" included, is a chat message for the webhook.
pub fn is_known_command(line: &str) -> bool {
	line.split_whitespace()
		.next()
		.is_some_and(|word| COMMANDS.contains(&word))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_command_with_arguments() {
		assert!(is_known_command("/url https://n8n.example.com/webhook/x"));
		assert!(is_known_command("/exit"));
		assert!(is_known_command("  /help"));
	}

	#[test]
	fn test_unknown_slash_lines_are_messages() {
		assert!(!is_known_command("/start"));
		assert!(!is_known_command("/nope"));
		assert!(!is_known_command("/exitnow"));
		assert!(!is_known_command("hello /exit"));
		assert!(!is_known_command(""));
	}
}
