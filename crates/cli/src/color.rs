// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling for help output.

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

/// Shared palette: steel blue headers, light grey literals, medium grey
/// placeholders.
const HEADER: u8 = 74;
const LITERAL: u8 = 250;
const PLACEHOLDER: u8 = 245;

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Build clap `Styles` using the palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    Styles::styled().header(fg(HEADER)).literal(fg(LITERAL)).placeholder(fg(PLACEHOLDER))
}
