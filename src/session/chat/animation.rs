// Animation module for the pending-request indicator

use anyhow::Result;
use colored::*;
use crossterm::{cursor, execute};
use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Animation frames for loading indicator
const LOADING_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

const LOADING_MESSAGE: &str = "Waiting for webhook...";

// Show loading animation until the flag is raised
pub async fn show_loading_animation(done_flag: Arc<AtomicBool>) -> Result<()> {
	let mut stdout = stdout();
	let mut frame_idx = 0;

	execute!(stdout, cursor::SavePosition)?;

	while !done_flag.load(Ordering::SeqCst) {
		execute!(stdout, cursor::RestorePosition)?;

		print!(
			" {} {}",
			LOADING_FRAMES[frame_idx].cyan(),
			LOADING_MESSAGE.bright_blue()
		);
		stdout.flush()?;

		frame_idx = (frame_idx + 1) % LOADING_FRAMES.len();
		tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
	}

	// Wipe the indicator line
	execute!(stdout, cursor::RestorePosition)?;
	print!("{}", " ".repeat(LOADING_MESSAGE.len() + 4));
	execute!(stdout, cursor::RestorePosition)?;
	stdout.flush()?;

	Ok(())
}
