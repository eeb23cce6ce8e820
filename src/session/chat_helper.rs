// rustyline helper: slash-command completion, hints and highlighting

use colored::*;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};

use crate::session::chat::{is_known_command, COMMANDS};

pub struct CommandHelper {
	history_hinter: HistoryHinter,
}

impl CommandHelper {
	pub fn new() -> Self {
		Self {
			history_hinter: HistoryHinter {},
		}
	}
}

impl Default for CommandHelper {
	fn default() -> Self {
		Self::new()
	}
}

// Commands whose name starts with what has been typed so far.
// Only the command word is completed, never its arguments.
fn matching_commands(line: &str) -> Vec<&'static str> {
	if !line.starts_with('/') || line.contains(char::is_whitespace) {
		return Vec::new();
	}

	COMMANDS
		.iter()
		.copied()
		.filter(|cmd| cmd.starts_with(line))
		.collect()
}

impl Completer for CommandHelper {
	type Candidate = Pair;

	fn complete(
		&self,
		line: &str,
		_pos: usize,
		_ctx: &Context<'_>,
	) -> Result<(usize, Vec<Self::Candidate>), ReadlineError> {
		let candidates = matching_commands(line)
			.into_iter()
			.map(|cmd| Pair {
				display: cmd.to_string(),
				replacement: cmd.to_string(),
			})
			.collect();

		Ok((0, candidates))
	}
}

impl Hinter for CommandHelper {
	type Hint = String;

	fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
		if line.starts_with('/') {
			return matching_commands(line)
				.first()
				.map(|cmd| cmd[line.len()..].to_string())
				.filter(|rest| !rest.is_empty());
		}

		self.history_hinter.hint(line, pos, ctx)
	}
}

impl Highlighter for CommandHelper {
	fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
		if !line.starts_with('/') {
			return Borrowed(line);
		}

		// Unknown slash lines are ordinary messages and stay unstyled
		if is_known_command(line) || !matching_commands(line).is_empty() {
			Owned(line.green().to_string())
		} else {
			Borrowed(line)
		}
	}

	fn highlight_char(&self, line: &str, _pos: usize) -> bool {
		line.starts_with('/')
	}

	fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
		// Dim gray, like shell autosuggestions
		Owned(hint.bright_black().to_string())
	}
}

impl Validator for CommandHelper {}

impl Helper for CommandHelper {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_matching_commands() {
		assert_eq!(matching_commands("/h"), vec!["/help", "/history"]);
		assert_eq!(matching_commands("/url"), vec!["/url"]);
		assert!(matching_commands("hello").is_empty());
		assert!(matching_commands("/url http://x").is_empty());
	}
}
