#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset into the source
    pub offset: usize,
    /// 1-based line
    pub line: usize,
    /// 0-based byte column
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the 1-based `line` in `source`, without its newline.
pub fn get_line(source: &str, line: usize) -> &str {
    source
        .split('\n')
        .nth(line.saturating_sub(1))
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
        .unwrap_or("")
}


/// Renders `error` the way the driver reports it:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `123`)
/// -> main.pint:1:5
///   |
/// 1 | unit 123;
///   | -----^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let line_text = get_line(source, position.line);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    report.push_str(&format!(
        "-> {}:{}:{}\n",
        file, position.line, position.column
    ));
    report.push_str(&format!("{:>padding$}\n", "|"));
    report.push_str(&format!("{} | {}\n", line_string, line_text));

    let arrows = position.column + 1;
    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    report
}
