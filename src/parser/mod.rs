//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a hand-written recursive-descent parser with one token
//! of lookahead. Precedence is encoded by the call structure:
//!
//! - `stmt`: declarations (`int x = <expr>;`)
//! - `expr`: the additive tier, the multiplicative tier and primaries
//!
//! There is no error recovery; the first failure ends the parse.

pub mod expr;
pub mod parser;
pub mod stmt;
