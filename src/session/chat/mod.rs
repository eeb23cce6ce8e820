// Chat session module
mod animation;
mod assistant_output;
pub mod commands;
mod input;
pub mod markdown;
mod session;

// Re-export main structures and functions
pub use commands::{
	is_known_command, CLEAR_COMMAND, COMMANDS, EXIT_COMMAND, HELP_COMMAND, HISTORY_COMMAND, LOGLEVEL_COMMAND,
	QUIT_COMMAND, SESSION_COMMAND, URL_COMMAND,
};
pub use session::{run_interactive_session, ChatSession, CHAT_TITLE};
