//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion: which items were reported skipped,
//! which spinners were started (the "installing" notices), and what the
//! run printed on success or failure.

use std::sync::{Arc, Mutex};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    skips: Vec<String>,
    headers: Vec<String>,
    categories: Vec<(String, usize, usize)>,
    spinners: Vec<String>,
    spinner_finishes: Arc<Mutex<Vec<String>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured skip notices.
    pub fn skips(&self) -> &[String] {
        &self.skips
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured category banners.
    pub fn categories(&self) -> &[(String, usize, usize)] {
        &self.categories
    }

    /// Get the messages of all spinners started (the "installing" notices).
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get the finish messages of all completed spinners.
    pub fn spinner_finishes(&self) -> Vec<String> {
        self.spinner_finishes.lock().unwrap().clone()
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|w| w.contains(text))
    }

    /// Check if any skip notice contains the given text.
    pub fn has_skip(&self, text: &str) -> bool {
        self.skips.iter().any(|s| s.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn skipped(&mut self, msg: &str) {
        self.skips.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            finishes: Arc::clone(&self.spinner_finishes),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_category(&mut self, name: &str, current: usize, total: usize) {
        self.categories.push((name.to_string(), current, total));
    }
}

/// Spinner that records its finish messages into the owning [`MockUI`].
struct MockSpinner {
    finishes: Arc<Mutex<Vec<String>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.finishes.lock().unwrap().push(format!("ok: {}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finishes.lock().unwrap().push(format!("fail: {}", msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_status_lines() {
        let mut ui = MockUI::new();
        ui.message("starting");
        ui.success("done");
        ui.warning("careful");
        ui.error("boom");
        ui.skipped("wget already installed");

        assert_eq!(ui.messages(), &["starting".to_string()]);
        assert_eq!(ui.successes(), &["done".to_string()]);
        assert!(ui.has_warning("careful"));
        assert_eq!(ui.errors(), &["boom".to_string()]);
        assert!(ui.has_skip("wget"));
    }

    #[test]
    fn captures_spinner_lifecycle() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Installing wget…");
        spinner.finish_success("wget installed");

        assert_eq!(ui.spinners(), &["Installing wget…".to_string()]);
        assert_eq!(ui.spinner_finishes(), vec!["ok: wget installed"]);
    }

    #[test]
    fn captures_categories_in_order() {
        let mut ui = MockUI::new();
        ui.show_category("Taps", 1, 8);
        ui.show_category("Formulas", 2, 8);

        assert_eq!(
            ui.categories(),
            &[("Taps".to_string(), 1, 8), ("Formulas".to_string(), 2, 8)]
        );
    }
}
