use crossterm::style::{style, Stylize};
use crossterm::tty::IsTty;
use std::io;

pub fn stdout_is_terminal() -> bool {
    io::stdout().is_tty()
}

/// Renders a diagnostic line in red when color output is enabled.
pub fn paint_error(text: &str, color: bool) -> String {
    if color {
        style(text).red().bold().to_string()
    } else {
        text.to_string()
    }
}
