#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorTip},
    interpreter::interpreter::{Interpreter, Outcome},
    lexer::{lexer::tokenize, source::TokenStream},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Tokenizes, parses and runs `source` on a fresh interpreter.
pub fn run_source(source: &str, file: Option<String>) -> Result<Outcome, Error> {
    let tokens = tokenize(source.to_string(), file)?;
    let program = parse(TokenStream::new(tokens))?;

    Interpreter::new().run(&program)
}

/// Returns the 1-based line number, the line text and the column of a byte
/// offset into `content`. Offsets past the end point at the last line.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last = (line_number, line.to_string(), line.trim_end_matches('\n').len());
        start = end;
        line_number += 1;
    }

    last
}


/// Builds a caret diagnostic for `error` against the source it came from.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: SyntaxError (expected Dot, found EOF)
        -> program.lit
          |
        1 | Set x to 1
          | ----------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut lines = Vec::new();

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    lines.push(format!("-> {}", position.1));
    lines.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    lines.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    lines.join("\n")
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
