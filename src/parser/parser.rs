//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct, its token-level primitives and the
//! `parse` entry point. Grammar rules live in `stmt` (declarations) and `expr`
//! (the two operator tiers and primaries); each is a plain function over
//! `&mut Parser` returning a `Result`, so the first failure unwinds the whole
//! parse through `?`.

use std::rc::Rc;

use crate::{
    ast::statements::Program,
    errors::{
        diagnostics::{Diagnostic, DiagnosticSink},
        errors::{Error, ErrorImpl},
    },
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_var_decl_stmt;

/// The main parser structure that maintains parsing state.
///
/// Holds the (read-only) token stream and a cursor into it. The cursor never
/// moves past the `EOF` token.
pub struct Parser<'tokens, 'sink> {
    /// The list of tokens to parse
    tokens: &'tokens [Token],
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Where parse failures are reported
    diagnostics: &'sink mut dyn DiagnosticSink,
    /// Stand-in returned by `peek` when the stream has no `EOF` of its own
    eof: Token,
}

impl<'tokens, 'sink> Parser<'tokens, 'sink> {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens to parse, normally the output of `tokenize`
    /// * `file` - Reference-counted string containing the source name
    /// * `diagnostics` - Sink that parse failures are reported on
    pub fn new(
        tokens: &'tokens [Token],
        file: Rc<String>,
        diagnostics: &'sink mut dyn DiagnosticSink,
    ) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(|| Position(0, Rc::clone(&file)));

        Parser {
            tokens,
            pos: 0,
            diagnostics,
            eof: Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: Span {
                    start: end.clone(),
                    end,
                },
            },
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Returns the token just before the cursor.
    pub fn previous(&self) -> &Token {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&self.eof)
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EOF
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Advances to the next token (unless at `EOF`) and returns the token stepped over.
    pub fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Advances if the current token is of `kind`. The cursor is left alone otherwise.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `UnexpectedTokenDetailed` error carrying
    /// `message` and the offending token. The cursor does not move on failure.
    pub fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }

        let token = self.peek();
        Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from(message),
            },
            token.span.start.clone(),
        ))
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.peek().span.start.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Tokens left after the one under the cursor.
    pub fn remaining(&self) -> &'tokens [Token] {
        self.tokens.get(self.pos + 1..).unwrap_or(&[])
    }

    pub fn report(&mut self, error: Error) {
        self.diagnostics.report(Diagnostic::error(error));
    }
}

/// Parses a stream of tokens into a `Program`.
///
/// Declarations are parsed until `EOF`. The first failing declaration fails the
/// whole parse; no partial program is ever returned. The failure is also
/// reported on `diagnostics`.
///
/// # Arguments
///
/// * `tokens` - Tokens to parse, normally the output of `tokenize`
/// * `file` - Reference-counted string containing the source name
/// * `diagnostics` - Sink the failure is reported on
pub fn parse(
    tokens: &[Token],
    file: Rc<String>,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file, diagnostics);

    let result = parse_program(&mut parser);
    if let Err(error) = &result {
        parser.report(error.clone());
    }

    result
}

fn parse_program(parser: &mut Parser<'_, '_>) -> Result<Program, Error> {
    let mut declarations = vec![];

    while !parser.is_at_end() {
        declarations.push(parse_var_decl_stmt(parser)?);
    }

    // Only reachable for hand-built streams with tokens after an `EOF`.
    if let Some(token) = parser.remaining().first() {
        return Err(Error::new(
            ErrorImpl::TrailingTokens {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    Ok(Program {
        declarations,
        span: Span {
            start: Position(0, parser.get_file()),
            end: parser.peek().span.end.clone(),
        },
    })
}
