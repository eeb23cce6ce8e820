// Session module implementation
mod commands;
mod core;
mod display;
mod runner;

pub use self::core::ChatSession;
pub use display::CHAT_TITLE;
pub use runner::run_interactive_session;
