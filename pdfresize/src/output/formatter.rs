//! User-facing message output.
//!
//! All terminal output goes through [`OutputFormatter`], which owns
//! the quiet/verbose decisions so callers never check flags
//! themselves. Quiet mode silences everything except warnings and
//! errors; verbose mode additionally prints label/value details.
//!
//! # Examples
//!
//! ```
//! use pdfresize::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Resizing drawing.pdf...");
//! formatter.success("Wrote processed/Order1_File1.pdf");
//! ```

use crate::config::Config;
use std::io;

/// Kind of message being printed, which picks the prefix and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Plain status line.
    Info,
    /// Completed operation.
    Success,
    /// Something worth attention that did not stop the run.
    Warning,
    /// A failure.
    Error,
}

impl MessageLevel {
    fn prefix(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "⚠ ",
            Self::Error => "✗ ",
        }
    }

    fn color(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Success => Some("\x1b[32m"),
            Self::Warning => Some("\x1b[33m"),
            Self::Error => Some("\x1b[31m"),
        }
    }
}

/// Terminal output with quiet/verbose handling and optional color.
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    colored: bool,
}

impl OutputFormatter {
    /// Create a formatter with explicit quiet and verbose flags.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter from the run configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet, config.verbose)
    }

    /// Create a formatter that only prints warnings and errors.
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Create a formatter with verbose details enabled.
    pub fn verbose() -> Self {
        Self::new(false, true)
    }

    /// Color only when stdout is a terminal, TERM is set, and NO_COLOR
    /// is not.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal()
            && std::env::var("TERM").is_ok()
            && std::env::var_os("NO_COLOR").is_none()
    }

    /// Status line; silenced by quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.paint(MessageLevel::Info, message);
        }
    }

    /// Completion line; silenced by quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.paint(MessageLevel::Success, message);
        }
    }

    /// Warning; printed even in quiet mode.
    pub fn warning(&self, message: &str) {
        self.paint(MessageLevel::Warning, message);
    }

    /// Failure; printed even in quiet mode.
    pub fn error(&self, message: &str) {
        self.paint(MessageLevel::Error, message);
    }

    fn paint(&self, level: MessageLevel, message: &str) {
        let prefix = level.prefix();
        match level.color() {
            Some(color) if self.colored => println!("{color}{prefix}{message}\x1b[0m"),
            _ => println!("{prefix}{message}"),
        }
    }

    /// Heading followed by nothing else on the line; silenced by quiet
    /// mode.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("\n{title}");
        }
    }

    /// Indented label/value pair; only printed in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Empty line; silenced by quiet mode.
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Numbered list entry (1-based); silenced by quiet mode.
    pub fn list_item(&self, index: usize, message: &str) {
        if !self.quiet {
            println!("  {index}. {message}");
        }
    }

    /// Whether non-error output is being shown.
    pub fn should_print(&self) -> bool {
        !self.quiet
    }

    /// Whether verbose details are being shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Whether quiet mode is on.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
