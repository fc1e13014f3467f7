//! Parser module that evaluates expressions as it parses them.
//!
//! The parser pulls tokens from its own lexer one at a time and reduces
//! the input to a single integer. It handles:
//!
//! - Operator precedence (`*` and `/` over `+` and `-`)
//! - Left-to-right associativity within a precedence level
//! - Grammar violations, division by zero, overflow and trailing input

pub mod lookups;
pub mod parser;
