//! Output settings for a single command.
//!
//! Combines the `[ui]` config section, the global `--no-color`/`--ascii`
//! flags, the per-command `--json`/`--format` flags and what stdout is
//! attached to.

use std::io::IsTerminal;

use crate::config::UiSection;

/// How a command writes its result to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The ledger result types as pretty JSON
    Json,
    /// `key=value` lines and space-separated rows
    #[default]
    Plain,
    /// Badges, colors and bordered tables
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Global output flags from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    pub no_color: bool,
    pub ascii: bool,
}

/// Resolved output settings.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub mode: OutputMode,
}

#[derive(Debug, Clone, Copy)]
struct Terminal {
    is_tty: bool,
    dumb: bool,
    no_color_env: bool,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

impl UiContext {
    /// Settings for a command that may print `--json` or take `--format`.
    pub fn new(settings: &UiSection, flags: UiFlags, json: bool, format: Option<&str>) -> Self {
        Self::resolve(settings, flags, json, format, Terminal::detect())
    }

    /// `--json` wins. Pretty output needs a real terminal and is turned off by
    /// `--format plain` or `TERM=dumb`.
    fn resolve(
        settings: &UiSection,
        flags: UiFlags,
        json: bool,
        format: Option<&str>,
        term: Terminal,
    ) -> Self {
        let mode = if json {
            OutputMode::Json
        } else if term.is_tty && !term.dumb && format != Some("plain") {
            OutputMode::Pretty
        } else {
            OutputMode::Plain
        };
        let color =
            term.is_tty && !term.dumb && !term.no_color_env && settings.color && !flags.no_color;

        Self {
            color,
            unicode: settings.unicode && !flags.ascii,
            mode,
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    #[cfg(test)]
    pub fn pretty() -> Self {
        Self {
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }
}
