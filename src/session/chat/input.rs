// User input handling module

use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as RustylineConfig, EditMode, Editor};

use super::commands::EXIT_COMMAND;
use crate::session::chat_helper::CommandHelper;

pub type ChatEditor = Editor<CommandHelper, DefaultHistory>;

// One editor per session so history survives between prompts
pub fn create_editor() -> Result<ChatEditor> {
	let config = RustylineConfig::builder()
		.completion_type(CompletionType::List)
		.edit_mode(EditMode::Emacs)
		.auto_add_history(true)
		.bell_style(rustyline::config::BellStyle::None)
		.build();

	let mut editor = Editor::with_config(config)?;
	editor.set_helper(Some(CommandHelper::new()));
	Ok(editor)
}

// Read user input with command completion; Ctrl+C clears the line, Ctrl+D exits
pub fn read_user_input(editor: &mut ChatEditor) -> Result<String> {
	let prompt = "> ".bright_blue().to_string();

	match editor.readline(&prompt) {
		Ok(line) => Ok(line),
		Err(ReadlineError::Interrupted) => {
			println!("\nCancelled");
			Ok(String::new())
		}
		Err(ReadlineError::Eof) => {
			println!("\nExiting session.");
			Ok(EXIT_COMMAND.to_string())
		}
		Err(err) => Err(err.into()),
	}
}
