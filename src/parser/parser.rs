//! Recursive-descent parser that evaluates while it parses.
//!
//! Each grammar rule is a method, and the call nesting mirrors the grammar:
//!
//! ```text
//! expression := term (('+'|'-') term)*
//! term       := factor (('*'|'/') factor)*
//! factor     := INTEGER
//! ```
//!
//! No AST is built. Every rule returns the integer value of the input it
//! consumed.

use std::mem;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenValue},
    },
};

use super::lookups::{apply_binary, binding_power, BindingPower};

/// The parser state: an owned lexer and one token of lookahead.
///
/// `current_token` is always the next unconsumed token. It is primed by
/// [`Parser::new`], so grammar methods never observe an absent token.
pub struct Parser {
    /// The lexer producing tokens on demand
    lexer: Lexer,
    /// The next unconsumed token
    current_token: Token,
}

impl Parser {
    /// Creates a new Parser over `source` and reads its first token.
    ///
    /// # Arguments
    ///
    /// * `source` - The expression to evaluate
    /// * `file` - Name used in error positions, `"shell"` when `None`
    pub fn new(source: String, file: Option<String>) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source, file)?;
        let current_token = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current_token,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `UnexpectedToken` error positioned at the
    /// current token.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: kind,
                },
                self.current_token.span.start.clone(),
            ));
        }

        let next = self.lexer.next_token()?;
        log::trace!("ate {}", self.current_token);
        Ok(mem::replace(&mut self.current_token, next))
    }

    /// `factor := INTEGER`
    pub fn factor(&mut self) -> Result<i64, Error> {
        let token = self.eat(TokenKind::Integer)?;

        match token.value {
            TokenValue::Integer(value) => Ok(value),
            _ => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::Integer,
                    found: token.kind,
                },
                token.span.start,
            )),
        }
    }

    /// `term := factor (('*'|'/') factor)*`
    pub fn term(&mut self) -> Result<i64, Error> {
        let mut result = self.factor()?;

        while binding_power(self.current_token_kind()) == BindingPower::Multiplicative {
            let kind = self.current_token_kind();
            let operator = self.eat(kind)?;
            let right = self.factor()?;
            result = apply_binary(&operator, result, right)?;
        }

        Ok(result)
    }

    /// `expression := term (('+'|'-') term)*`
    pub fn expr(&mut self) -> Result<i64, Error> {
        let mut result = self.term()?;

        while binding_power(self.current_token_kind()) == BindingPower::Additive {
            let kind = self.current_token_kind();
            let operator = self.eat(kind)?;
            let right = self.term()?;
            result = apply_binary(&operator, result, right)?;
        }

        Ok(result)
    }

    /// Evaluates the whole input as one expression.
    ///
    /// Consumes the parser; a fresh one is needed for every input.
    pub fn evaluate(mut self) -> Result<i64, Error> {
        let result = self.expr()?;

        if self.current_token_kind() != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::TrailingInput {
                    token: self.current_token_kind(),
                },
                self.current_token.span.start.clone(),
            ));
        }

        Ok(result)
    }
}
