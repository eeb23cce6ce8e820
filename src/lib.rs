// Main lib.rs file that exports our modules
pub mod config;
pub mod directories;
pub mod session;
pub mod webhook;

// Re-export commonly used items for convenience
pub use config::Config;
pub use session::chat::ChatSession;
pub use session::{Role, Session, Turn};
pub use webhook::{normalize, NormalizedResult, WebhookClient, WebhookError};
