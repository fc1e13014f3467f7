//! Error types and error handling for the interpreter.
//!
//! This module defines the error types shared by the lexer and the parser.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and evaluation
//! - Error names and tips used by diagnostics

pub mod errors;
