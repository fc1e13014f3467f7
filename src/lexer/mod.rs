//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that turns an expression
//! into tokens for the parser, one token at a time. It handles:
//!
//! - Multi-digit integer literals
//! - The four arithmetic operators
//! - Whitespace skipping
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
