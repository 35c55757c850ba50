//! Console output for the pizza CLI
//!
//! Uses owo-colors for terminal colors. Colors are only applied when the
//! stream supports them, so piped output stays byte-for-byte plain.

use crate::timed::StatusSink;
use owo_colors::{OwoColorize, Stream};

/// Print a status line exactly as given
/// Example: "🍕 Baked in 3 sec!"
pub fn status(line: &str) {
    println!("{}", line);
}

/// Print a menu line, highlighting its index
/// Example: "1 - Margherita 🧀: tomato sauce, mozzarella, tomatoes"
pub fn menu_item(line: &str) {
    match line.split_once(" - ") {
        Some((index, rest)) => println!(
            "{} - {}",
            index.if_supports_color(Stream::Stdout, |t| t.cyan()),
            rest
        ),
        None => println!("{}", line),
    }
}

/// Print an info message (cyan prefix, stderr)
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "::".if_supports_color(Stream::Stderr, |t| t.cyan()),
        message
    );
}

/// Print an error message (red, stderr)
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |t| t.red()),
        message.if_supports_color(Stream::Stderr, |t| t.red())
    );
}

/// Status sink that prints to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl StatusSink for Console {
    fn emit(&mut self, line: &str) {
        status(line);
    }
}
