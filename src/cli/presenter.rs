//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting.
///
/// Values go to stdout; status and errors go to stderr.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Create a presenter that never emits color codes
    pub fn plain() -> Self {
        colored::control::set_override(false);
        Self::new()
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output a value to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a section name (for section listing)
    pub fn section_header(&self, name: &str) {
        println!("{}", format!("[{}]", name).as_str().bold());
    }

    /// Format a `key=value` line
    pub fn format_entry(&self, key: &str, value: &str) -> String {
        format!("{}={}", key.cyan(), value)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
