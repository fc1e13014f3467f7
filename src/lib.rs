#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorTip},
    parser::parser::Parser,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a named source.
///
/// Offsets are stored as `u32`; sources larger than 4 GiB report every
/// position past `u32::MAX` as `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn at(offset: usize, file: &Rc<String>) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX), Rc::clone(file))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Evaluates an arithmetic expression over non-negative integers.
///
/// Supports `+`, `-`, `*` and `/` with the usual precedence and left
/// associativity. Division truncates toward zero.
///
/// ```
/// assert_eq!(intcalc::evaluate("14 + 2 * 3 - 6 / 2").unwrap(), 17);
/// ```
pub fn evaluate(expression: &str) -> Result<i64, Error> {
    let result = Parser::new(expression.to_string(), None)?.evaluate();

    match &result {
        Ok(value) => log::debug!("{:?} = {}", expression, value),
        Err(error) => log::debug!("{:?} failed: {}", expression, error),
    }

    result
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line itself and the offset of
/// `position` within that line. An offset equal to the source length points
/// just past the last character.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input, on the last (possibly empty) line
    let last = source.rsplit('\n').next().unwrap_or("");
    let line_number = source.matches('\n').count() + 1;
    Some((line_number, last.to_string(), last.len()))
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> shell
          |
        1 | 2 $ 3
          | --^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
