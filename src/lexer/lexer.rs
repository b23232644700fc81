use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::{
        diagnostics::{Diagnostic, DiagnosticSink},
        errors::{Error, ErrorImpl},
    },
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer<'_, '_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("token patterns are valid regexes"),
            handler,
        }
    }
}

lazy_static! {
    // Every pattern is anchored at the cursor. Order matters: the first match wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[a-zA-Z][a-zA-Z0-9]*", symbol_handler),
        RegexPattern::new("^[0-9]+", number_handler),
        RegexPattern::new("^[ \\t\\n\\x0B\\x0C\\r]+", skip_handler),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
    ];
}

pub struct Lexer<'src, 'sink> {
    tokens: Vec<Token>,
    source: &'src str,
    pos: usize,
    file: Rc<String>,
    diagnostics: &'sink mut dyn DiagnosticSink,
}

impl<'src, 'sink> Lexer<'src, 'sink> {
    pub fn new(
        source: &'src str,
        file: Option<String>,
        diagnostics: &'sink mut dyn DiagnosticSink,
    ) -> Self {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
            diagnostics,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::from_offset(self.pos, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes from the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position::from_offset(self.pos + len, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Reports the character under the cursor and steps over it.
    fn skip_unrecognised(&mut self) {
        if let Some(ch) = self.remainder().chars().next() {
            let error = Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: ch.to_string(),
                },
                self.position(),
            );
            self.diagnostics.report(Diagnostic::warning(error));
            self.advance_n(ch.len_utf8());
        }
    }
}

fn number_handler(lexer: &mut Lexer<'_, '_>, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer<'_, '_>, matched: &str) {
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer<'_, '_>, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

/// Scans `source` into tokens, always ending with a single `EOF` token.
///
/// Characters that start no token are reported on `diagnostics` as warnings
/// and skipped; scanning itself never fails.
pub fn tokenize(
    source: &str,
    file: Option<String>,
    diagnostics: &mut dyn DiagnosticSink,
) -> Vec<Token> {
    let mut lex = Lexer::new(source, file, diagnostics);

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remaining)
                .map(|found| (pattern.handler, found.as_str()))
        });

        match matched {
            Some((handler, value)) => handler(&mut lex, value),
            None => lex.skip_unrecognised(),
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), span));
    lex.tokens
}
