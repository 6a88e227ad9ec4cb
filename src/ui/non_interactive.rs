//! Non-interactive UI for CI/headless environments.
//!
//! Spinners become plain "installing" lines, icons become bracketed text,
//! and nothing assumes a TTY. This is what CI logs see.

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("  [ok] {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("[warn] {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("[FAIL] {}", msg);
    }

    fn skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("  [skip] {}", msg);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("  [run] {}", message);
        }
        Box::new(LineSpinner {
            show: self.mode.shows_status(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_category(&mut self, name: &str, current: usize, total: usize) {
        println!("\n[{}/{}] {}", current, total, name);
    }
}

/// Spinner stand-in that prints finish lines instead of animating.
struct LineSpinner {
    show: bool,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.show {
            println!("  [ok] {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("  [FAIL] {}", msg);
    }
}
