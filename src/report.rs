//! Rendering of taint analysis reports and the flag listing.
//!
//! Both renderers are pure: they take a value and a color configuration
//! and return the finished text, so every output shape is testable without
//! touching stdout.

use std::fmt::Write as _;

use crate::flags::{SPACER, TAINT_FLAGS};
use crate::style::ColorConfig;

/// Render the full analysis report for a taint status value.
///
/// The report is a one-character-per-flag summary line, the numeric value
/// in decimal and 16-digit uppercase hex, and one detail line per set flag
/// (plus the notable-unset lines). A zero value renders
/// `(Kernel is not tainted)` instead of an empty detail list.
pub fn render_analysis(status: u64, colors: &ColorConfig) -> String {
    let mut out = String::new();

    let _ = write!(out, "{}Taint flags:            {}", colors.bold(), colors.reset());
    for flag in &TAINT_FLAGS {
        if flag.is_set(status) {
            let _ = write!(
                out,
                "{}{}{}",
                colors.severity(flag.severity),
                flag.set_char,
                colors.reset()
            );
        } else if flag.unset_char != SPACER {
            let _ = write!(
                out,
                "{}{}{}",
                colors.severity(flag.severity),
                flag.unset_char,
                colors.reset()
            );
        } else {
            out.push(SPACER);
        }
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "{}Numeric representation: {}{status} / 0x{status:016X}",
        colors.bold(),
        colors.reset()
    );
    out.push('\n');

    for flag in &TAINT_FLAGS {
        if flag.is_set(status) {
            let _ = writeln!(
                out,
                "- {}{}{} {} ({})",
                colors.severity(flag.severity),
                flag.set_char,
                colors.reset(),
                flag.set_description,
                flag.value()
            );
        } else if flag.unset_char != SPACER {
            if let Some(description) = flag.unset_description {
                let _ = writeln!(
                    out,
                    "- {}{}{} {} ({} unset)",
                    colors.info(),
                    flag.unset_char,
                    colors.reset(),
                    description,
                    flag.value()
                );
            }
        }
    }
    if status == 0 {
        out.push_str("(Kernel is not tainted)\n");
    }
    out.push('\n');

    out
}

/// Render the listing of all known flags and their descriptions.
///
/// One line per set description, preceded by the unset description for the
/// few flags that have one. No coloring.
pub fn render_flag_list() -> String {
    let mut out = String::new();
    for flag in &TAINT_FLAGS {
        if flag.unset_char != SPACER {
            if let Some(description) = flag.unset_description {
                let _ = writeln!(
                    out,
                    "- {}: {} ({} unset)",
                    flag.unset_char,
                    description,
                    flag.value()
                );
            }
        }
        let _ = writeln!(
            out,
            "- {}: {} ({})",
            flag.set_char,
            flag.set_description,
            flag.value()
        );
    }
    out
}
