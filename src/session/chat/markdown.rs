// Markdown rendering for assistant replies

use anyhow::Result;
use colored::*;
use regex::Regex;
use std::sync::OnceLock;
use termimad::MadSkin;

// Fenced code block with optional language tag
fn code_block_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"```(\w+)?\n([\s\S]*?)\n```").expect("valid code block regex"))
}

// Line-level markdown markers: headings, lists, quotes, tables
fn block_marker_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"(?m)^\s{0,3}(#{1,6}\s|[-*+]\s|\d+\.\s|>\s|\|.*\|)").expect("valid block marker regex")
	})
}

// Inline markers: bold, inline code, links
fn inline_marker_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"\*\*[^*]+\*\*|__[^_]+__|`[^`\n]+`|\[[^\]]+\]\([^)]+\)").expect("valid inline marker regex")
	})
}

pub struct MarkdownRenderer {
	skin: MadSkin,
}

impl MarkdownRenderer {
	pub fn new() -> Self {
		let mut skin = MadSkin::default();

		use termimad::crossterm::style::Attribute;
		use termimad::crossterm::style::Color;

		skin.headers[0].set_fg(Color::Yellow);
		skin.headers[0].add_attr(Attribute::Bold);
		skin.headers[1].set_fg(Color::Blue);
		skin.headers[1].add_attr(Attribute::Bold);
		skin.headers[2].set_fg(Color::Cyan);

		skin.inline_code.set_bg(Color::Rgb { r: 60, g: 60, b: 60 });
		skin.inline_code.set_fg(Color::Yellow);

		skin.italic.set_fg(Color::Cyan);
		skin.bold.set_fg(Color::White);
		skin.bold.add_attr(Attribute::Bold);
		skin.quote_mark.set_fg(Color::Blue);
		skin.bullet.set_fg(Color::Green);

		Self { skin }
	}

	/// Print prose through termimad and fenced code blocks verbatim inside a frame
	pub fn render_and_print(&self, markdown: &str) -> Result<()> {
		let mut last_end = 0;

		for cap in code_block_regex().captures_iter(markdown) {
			let Some(whole) = cap.get(0) else { continue };

			let before = &markdown[last_end..whole.start()];
			if !before.trim().is_empty() {
				self.skin.print_text(before);
			}

			let language = cap.get(1).map(|m| m.as_str()).unwrap_or("text");
			let code = cap.get(2).map(|m| m.as_str()).unwrap_or_default();

			println!();
			println!("{}", format!("┌─ {} ─", language).bright_black());
			println!("{}", code);
			println!("{}", "└─────".bright_black());
			println!();

			last_end = whole.end();
		}

		let remaining = &markdown[last_end..];
		if !remaining.trim().is_empty() {
			self.skin.print_text(remaining);
		}

		Ok(())
	}
}

impl Default for MarkdownRenderer {
	fn default() -> Self {
		Self::new()
	}
}

// Heuristic: is it worth sending this through the markdown renderer?
pub fn is_markdown_content(content: &str) -> bool {
	content.contains("```")
		|| block_marker_regex().is_match(content)
		|| inline_marker_regex().is_match(content)
}
