pub mod app;
pub(crate) mod command_executor;
pub mod error;
pub mod types;


pub use app::ConsolePlatform;
pub use types::{AppEvent, MessageSeverity, PlatformCommand, PlatformEventHandler};
