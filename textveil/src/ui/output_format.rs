// textveil/src/ui/output_format.rs
//! Low-level colored message formatting for stderr output.
//!
//! Writers are injected so tests can capture output; color is applied only
//! when the caller says the destination supports it.

use owo_colors::OwoColorize;
use std::io::Write;

pub fn print_info_message(
    writer: &mut dyn Write,
    msg: &str,
    supports_color: bool,
) -> std::io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message(
    writer: &mut dyn Write,
    msg: &str,
    supports_color: bool,
) -> std::io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.yellow())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_error_message(
    writer: &mut dyn Write,
    msg: &str,
    supports_color: bool,
) -> std::io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.red())
    } else {
        writeln!(writer, "{}", msg)
    }
}
