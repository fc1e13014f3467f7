use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, OPERATOR_LOOKUP};

lazy_static! {
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Single-pass, forward-only scanner over an expression.
///
/// `pos` is a byte offset into `source`. It always sits on a char boundary,
/// or equals `source.len()` once the input is exhausted, in which case
/// `current_char` is `None`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    current_char: Option<char>,
    file: Rc<String>,
    exhausted: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Result<Lexer, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        if source.is_empty() {
            return Err(Error::new(ErrorImpl::EmptyInput, Position(0, file_name)));
        }

        let current_char = source.chars().next();

        Ok(Lexer {
            source,
            pos: 0,
            current_char,
            file: file_name,
            exhausted: false,
        })
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn current_char(&self) -> Option<char> {
        self.current_char
    }

    pub fn advance(&mut self) {
        if let Some(c) = self.current_char {
            self.pos += c.len_utf8();
        }
        self.current_char = self.source[self.pos..].chars().next();
    }

    /// Skips spaces. Tabs, newlines and other whitespace are not skipped.
    pub fn skip_whitespace(&mut self) {
        while self.current_char == Some(' ') {
            self.advance();
        }
    }

    /// Reads a (multi-digit) integer literal starting at the cursor.
    pub fn read_integer(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let Some(matched) = INTEGER_PATTERN.find(&self.source[start..]) else {
            return Err(match self.current_char {
                Some(character) => self.invalid_character(character),
                None => Error::new(
                    ErrorImpl::UnexpectedEndOfInput,
                    Position::at(start, &self.file),
                ),
            });
        };
        let literal = matched.as_str().to_string();

        let value = literal.parse::<i64>().map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: literal.clone(),
                },
                Position::at(start, &self.file),
            )
        })?;

        // Digits are ASCII, one byte per char
        for _ in 0..literal.len() {
            self.advance();
        }

        Ok(MK_TOKEN!(
            TokenKind::Integer,
            TokenValue::Integer(value),
            MK_SPAN!(self, start, self.pos)
        ))
    }

    /// Produces the next token, consuming exactly its characters.
    ///
    /// Once the input is exhausted every call returns an `EOF` token.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        let start = self.pos;
        let token = match self.current_char {
            None => MK_TOKEN!(TokenKind::EOF, TokenValue::None, MK_SPAN!(self, start, start)),
            Some(c) if c.is_ascii_digit() => self.read_integer()?,
            Some(c) => match OPERATOR_LOOKUP.get(&c) {
                Some(kind) => {
                    self.advance();
                    MK_TOKEN!(*kind, TokenValue::Operator(c), MK_SPAN!(self, start, self.pos))
                }
                None => return Err(self.invalid_character(c)),
            },
        };

        log::trace!("lexed {} at {}", token, start);
        Ok(token)
    }

    fn invalid_character(&self, character: char) -> Error {
        Error::new(
            ErrorImpl::InvalidCharacter { character },
            Position::at(self.pos, &self.file),
        )
    }
}

/// Yields tokens up to and including `EOF`, or up to the first error.
impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        self.exhausted = token.as_ref().map_or(true, |token| token.kind == TokenKind::EOF);
        Some(token)
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file)?.collect()
}
