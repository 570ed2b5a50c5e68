use console::style;
use std::fmt::Display;

/// Styled terminal output for human-readable reports
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Aligned `label value` row
    pub fn field(&self, label: &str, value: impl Display) {
        println!("  {:<14} {}", style(label).dim(), value);
    }

    /// Presence row: green check or dimmed cross
    pub fn check(&self, label: &str, present: bool) {
        if present {
            println!("  {} {}", style("✓").green(), label);
        } else {
            println!("  {} {}", style("✗").dim(), style(label).dim());
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
