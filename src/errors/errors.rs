use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::EmptyInput => "EmptyInput",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { character } => ErrorTip::Suggestion(format!(
                "Character {:?} is not a digit, a space or one of `+ - * /`",
                character
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {}, found {}",
                expected, found
            )),
            ErrorImpl::DivisionByZero => ErrorTip::Suggestion(String::from(
                "Division by zero, the right operand of `/` evaluated to 0",
            )),
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected {} after a complete expression, did you miss an operator?",
                token
            )),
            ErrorImpl::EmptyInput => ErrorTip::None,
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "Input ended where an integer literal was expected",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::IntegerOverflow { operator } => ErrorTip::Suggestion(format!(
                "Result of `{}` does not fit in a 64-bit integer",
                operator
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("division by zero")]
    DivisionByZero,
    #[error("trailing input: {token}")]
    TrailingInput { token: TokenKind },
    #[error("empty input")]
    EmptyInput,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("integer overflow in `{operator}`")]
    IntegerOverflow { operator: char },
}
