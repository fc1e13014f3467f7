use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
}

pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Plus | TokenKind::Minus => BindingPower::Additive,
        TokenKind::Mul | TokenKind::Div => BindingPower::Multiplicative,
        TokenKind::Integer | TokenKind::EOF => BindingPower::Default,
    }
}

/// Folds `right` into `left` with the operator token's arithmetic.
///
/// Division truncates toward zero. A zero divisor is reported at the `/`,
/// and any result outside `i64` is reported as an overflow.
pub fn apply_binary(operator: &Token, left: i64, right: i64) -> Result<i64, Error> {
    let position = operator.span.start.clone();

    let (symbol, result) = match operator.kind {
        TokenKind::Plus => ('+', left.checked_add(right)),
        TokenKind::Minus => ('-', left.checked_sub(right)),
        TokenKind::Mul => ('*', left.checked_mul(right)),
        TokenKind::Div => {
            if right == 0 {
                return Err(Error::new(ErrorImpl::DivisionByZero, position));
            }
            ('/', left.checked_div(right))
        }
        TokenKind::Integer | TokenKind::EOF => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::Plus,
                    found: operator.kind,
                },
                position,
            ))
        }
    };

    result.ok_or_else(|| Error::new(ErrorImpl::IntegerOverflow { operator: symbol }, position))
}
