#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::{
    ast::statements::Program,
    errors::{
        diagnostics::DiagnosticSink,
        errors::{Error, ErrorTip},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source, paired with the name of that source.
///
/// Offsets are 32-bit; anything past `u32::MAX` is pinned to `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn from_offset(offset: usize, file: Rc<String>) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX), file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole front end over `source`: scan, then parse.
///
/// Scan warnings and the parse failure (if any) are reported on `diagnostics`.
pub fn parse_source(
    source: &str,
    file: Option<String>,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<Program, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source, file, diagnostics);

    parse(&tokens, file_name, diagnostics)
}

/// Finds the line containing byte `position` of `source`.
///
/// Returns the 1-based line number, the line text and the offset of `position`
/// within that line. Positions at or past the end land on the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the final line.
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            (line_number - 1, line.to_string(), line.len())
        }
        _ => (line_number, String::new(), 0),
    }
}

/// Renders `error` against the text it was produced from.
///
/// ```text
/// Error: UnexpectedTokenDetailed (Unexpected token: `3`, expected ';' after expression)
/// -> sample.decl
///   |
/// 1 | int sum = a + b - 2  3 / 4;
///   | ---------------------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = match error.get_tip() {
        ErrorTip::None => writeln!(out, "Error: {}", error.get_error_name()),
        tip => writeln!(out, "Error: {} ({})", error.get_error_name(), tip),
    };
    let _ = writeln!(out, "-> {}", position.1);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    // Columns are counted in characters, so multi-byte text keeps the caret aligned.
    let column = line_text
        .get(removed_whitespace..line_pos)
        .map_or(0, |before| before.chars().count());
    let arrows = column + 1;

    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| matches!(c, ' ' | '\t')).count();

    (String::from(&string[start..]), start)
}
