//! ANSI color handling for report output.
//!
//! Color emission is resolved once at startup from the `--color` flag and
//! the `FORCE_COLOR`/`NO_COLOR` environment variables, falling back to
//! stdout TTY detection. When disabled, every accessor returns an empty
//! string so callers can interpolate escapes unconditionally.

use std::io::{self, IsTerminal};

use clap::ValueEnum;

use crate::flags::Severity;

/// When to emit ANSI color escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal, `NO_COLOR` is unset, and
    /// `FORCE_COLOR` does not override.
    #[default]
    Auto,
    /// Always emit ANSI escapes, even when piped.
    Always,
    /// Never emit ANSI escapes.
    Never,
}

/// Resolved color-enabled flag with accessors that return either the real
/// escape sequence or an empty string.
#[derive(Debug, Clone, Copy)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve a [`ColorMode`] into a concrete on/off decision.
    ///
    /// Precedence (highest to lowest):
    /// 1. `ColorMode::Always` / `ColorMode::Never` (explicit CLI flag)
    /// 2. `FORCE_COLOR` env var (non-empty, non-`0` forces on)
    /// 3. `NO_COLOR` env var (any value forces off)
    /// 4. TTY detection on stdout
    pub fn from_mode(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if let Ok(val) = std::env::var("FORCE_COLOR") {
                    if !val.is_empty() && val != "0" {
                        return Self { enabled: true };
                    }
                }
                if std::env::var_os("NO_COLOR").is_some() {
                    return Self { enabled: false };
                }
                io::stdout().is_terminal()
            }
        };
        Self { enabled }
    }

    /// A configuration that never emits escapes.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Whether color output is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Reset all attributes.
    pub fn reset(&self) -> &'static str {
        if self.enabled {
            "\x1b[0m"
        } else {
            ""
        }
    }

    /// Bold, used for the report header labels.
    pub fn bold(&self) -> &'static str {
        if self.enabled {
            "\x1b[1m"
        } else {
            ""
        }
    }

    /// Green, used for [`Severity::Info`] flags.
    pub fn info(&self) -> &'static str {
        if self.enabled {
            "\x1b[0;32m"
        } else {
            ""
        }
    }

    /// Bold yellow, used for [`Severity::Warn`] flags and warnings.
    pub fn warn(&self) -> &'static str {
        if self.enabled {
            "\x1b[1;33m"
        } else {
            ""
        }
    }

    /// Bold red, used for [`Severity::Alert`] flags and fatal errors.
    pub fn alert(&self) -> &'static str {
        if self.enabled {
            "\x1b[1;31m"
        } else {
            ""
        }
    }

    /// The escape sequence for a flag of the given severity.
    pub fn severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Info => self.info(),
            Severity::Warn => self.warn(),
            Severity::Alert => self.alert(),
        }
    }
}
