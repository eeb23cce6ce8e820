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


// Assistant response output and formatting

use crate::config::Config;
use crate::session::chat::markdown::{is_markdown_content, MarkdownRenderer};
use crate::webhook::NormalizedResult;
use colored::Colorize;

// Print a fresh webhook result: errors in red, text through the markdown path
pub fn print_result(result: &NormalizedResult, config: &Config) {
	match result {
		NormalizedResult::Error(message) => print_assistant_error(message),
		NormalizedResult::Text(text) => print_assistant_response(text, config),
	}
}

// Helper function to print content with optional markdown rendering
pub fn print_assistant_response(content: &str, config: &Config) {
	if config.enable_markdown_rendering && is_markdown_content(content) {
		let renderer = MarkdownRenderer::new();
		if let Err(e) = renderer.render_and_print(content) {
			if config.get_log_level().is_debug_enabled() {
				println!("{}: {}", "Warning: Markdown rendering failed".yellow(), e);
			}
			println!("{}", content.bright_green());
		}
	} else {
		println!("{}", content.bright_green());
	}
}

pub fn print_assistant_error(content: &str) {
	println!("{}", content.bright_red());
}

pub fn print_user_message(content: &str) {
	println!("{} {}", ">".bright_blue(), content.bright_blue());
}
