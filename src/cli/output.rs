//! Output system for primesum
//!
//! Consistent, styled terminal output for the CLI surface. The sum itself
//! is always printed bare on stdout; everything here is the optional
//! human-readable dressing around it.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Get verbose mode status
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("{}", style(title).bold().underlined());
        }
    }

    /// Print summary statistics with enhanced styling
    pub fn summary_stats(&self, label: &str, value: usize) {
        if !self.quiet {
            println!(
                "  {} {}",
                style(label).dim(),
                style(value.to_string()).bold()
            );
        }
    }

    /// Print blank line
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }
}
