//! Output system for gitcc
//!
//! Results are printed with their plain rendering, coloured by status when
//! the terminal supports it. Errors always go to stderr.

use console::style;

use crate::validation::{Status, ValidationResult};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler; `verbose` also prints passing results
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", style("✔").green(), message);
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("error:").red().bold(), message);
    }

    /// Print a name followed by its description
    pub fn key_value(&self, key: &str, value: &str) {
        println!("  {:<14} {}", style(key).bold(), style(value).dim());
    }

    /// Print one validation result
    pub fn result(&self, result: &ValidationResult) {
        let rendered = result.to_string();
        let styled = match result.status {
            Status::Failure => style(rendered).red(),
            Status::Warning => style(rendered).yellow(),
            Status::Ok => style(rendered).green(),
        };
        println!("{styled}");
    }

    /// Print failures and warnings, plus passing results in verbose mode.
    ///
    /// Returns true when no result is a failure.
    pub fn print_results(&self, results: &[ValidationResult]) -> bool {
        for result in results {
            if !result.is_ok() || self.verbose {
                self.result(result);
            }
        }
        crate::history::all_passing(results)
    }
}
