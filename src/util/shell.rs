//! Terminal and JSON output for the CLI.
//!
//! [`Shell`] prints status lines with the label right-aligned in a 12 column
//! gutter, renders [`Diagnostic`]s, and in `--message-format json` mode
//! swaps all of that for one JSON object per line on stdout.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::util::diagnostic::{self, Diagnostic};

const GUTTER: usize = 12;

/// Human and JSON output are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMode {
    Human {
        verbosity: Verbosity,
        color: ColorChoice,
    },
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: errors only
    Quiet,
    Normal,
    /// `--verbose`: also unchanged files and progress
    Verbose,
}

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Only when stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Label shown in the status gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Created,
    Updated,
    Unchanged,
    Generating,
    Finished,
    Info,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Created => "Created",
            Status::Updated => "Updated",
            Status::Unchanged => "Unchanged",
            Status::Generating => "Generating",
            Status::Finished => "Finished",
            Status::Info => "Info",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Status::Created | Status::Updated | Status::Finished => "\x1b[1;32m",
            Status::Generating => "\x1b[1;36m",
            Status::Unchanged | Status::Info => "\x1b[1;34m",
        }
    }
}

/// Where all user-facing CLI output goes.
#[derive(Debug)]
pub struct Shell {
    mode: ShellMode,
    use_color: bool,
}

impl Shell {
    pub fn new(mode: ShellMode) -> Self {
        let use_color = match &mode {
            ShellMode::Json => false,
            ShellMode::Human { color, .. } => match color {
                ColorChoice::Auto => io::stderr().is_terminal(),
                ColorChoice::Always => true,
                ColorChoice::Never => false,
            },
        };

        Shell { mode, use_color }
    }

    /// Build the shell from the global CLI flags. `json` beats `quiet`,
    /// which beats `verbose`.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice, json: bool) -> Self {
        if json {
            return Shell::new(ShellMode::Json);
        }

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new(ShellMode::Human { verbosity, color })
    }

    fn verbosity(&self) -> Option<Verbosity> {
        match self.mode {
            ShellMode::Human { verbosity, .. } => Some(verbosity),
            ShellMode::Json => None,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity() == Some(Verbosity::Quiet)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity() == Some(Verbosity::Verbose)
    }

    pub fn is_json(&self) -> bool {
        self.mode == ShellMode::Json
    }

    /// Print `{status:>12} {msg}` to stderr. Nothing in quiet or JSON mode.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_json() || self.is_quiet() {
            return;
        }
        eprintln!("{} {}", self.format_status(status), msg);
    }

    /// Like [`Shell::status`], but only with `--verbose`.
    pub fn verbose(&self, status: Status, msg: impl Display) {
        if self.is_verbose() {
            self.status(status, msg);
        }
    }

    /// Render a diagnostic to stderr, or emit it as a JSON event.
    ///
    /// `--quiet` hides everything below an error.
    pub fn diagnostic(&self, diag: &Diagnostic) {
        if self.is_json() {
            self.json_event(&diag.to_json());
        } else if !self.is_quiet() || diag.severity == diagnostic::Severity::Error {
            diagnostic::emit(diag, self.use_color);
        }
    }

    /// Write one JSON line to stdout. Ignored outside JSON mode.
    pub fn json_event(&self, event: &serde_json::Value) {
        if !self.is_json() {
            return;
        }

        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", event);
        let _ = stdout.flush();
    }

    fn format_status(&self, status: Status) -> String {
        if self.use_color {
            format!("{}{:>GUTTER$}\x1b[0m", status.ansi(), status.label())
        } else {
            format!("{:>GUTTER$}", status.label())
        }
    }
}
