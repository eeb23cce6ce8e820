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


// Interactive session runner

use super::core::ChatSession;
use crate::config::{set_thread_config, Config};
use crate::{log_debug, log_error};
use crate::session::chat::animation::show_loading_animation;
use crate::session::chat::assistant_output::print_result;
use crate::session::chat::input::{create_editor, read_user_input};
use crate::session::chat::is_known_command;
use crate::webhook::WebhookError;
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Run an interactive session until /exit, /quit or Ctrl+D
pub async fn run_interactive_session(config: Config) -> Result<()> {
	// Set the thread-local config for logging macros
	set_thread_config(&config);

	let mut chat_session = ChatSession::new(config)?;
	chat_session.print_banner();

	let mut editor = create_editor()?;

	loop {
		let input = read_user_input(&mut editor)?;

		// Skip if input is empty (could be from Ctrl+C)
		if input.trim().is_empty() {
			continue;
		}

		if is_known_command(&input) {
			if chat_session.process_command(&input)? {
				break;
			}
			continue;
		}

		if !chat_session.is_configured() {
			chat_session.print_configuration_warning();
			continue;
		}

		// Nothing else is read from the terminal until this turn completes
		let done = Arc::new(AtomicBool::new(false));
		let animation_done = done.clone();
		let animation_task = tokio::spawn(async move {
			let _ = show_loading_animation(animation_done).await;
		});

		let outcome = chat_session.submit_turn(&input).await;

		done.store(true, Ordering::SeqCst);
		let _ = animation_task.await;
		println!();

		match outcome {
			Ok(result) => print_result(&result, &chat_session.config),
			Err(WebhookError::ConfigurationMissing) => chat_session.print_configuration_warning(),
			// Transport and HTTP failures arrive as NormalizedResult::Error
			Err(e) => log_error!("{}", e),
		}

		log_debug!("Transcript now holds {} turns", chat_session.session.len());
	}

	Ok(())
}
