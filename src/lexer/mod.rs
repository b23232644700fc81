//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of the `int` keyword, identifiers, number literals and operators
//! - Token position tracking for error reporting
//! - Skipping (and reporting) characters that start no token

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
