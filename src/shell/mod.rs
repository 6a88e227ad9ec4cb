//! Shell command execution and platform checks.

pub mod command;
pub mod platform;

pub use command::{ensure_success, execute, execute_quiet, probe, CommandOptions, CommandResult};
pub use platform::{home_dir, is_ci, is_elevated, is_macos};
