//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the main screen glue
//! and the interactive session runner.

pub mod app;
pub mod args;
pub mod channels_cmd;
pub mod config_cmd;
pub mod presenter;
pub mod screen;
pub mod session;

// Re-export commonly used types
pub use app::{run_session, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, SessionOptions};
pub use presenter::Presenter;
pub use screen::MainScreen;
