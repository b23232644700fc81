use crate::{
    ast::expressions::{BinaryExpr, BinaryOperator, Expr, NumberExpr, SymbolExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser<'_, '_>) -> Result<Expr, Error> {
    parse_term(parser)
}

/// Additive tier: `Factor (('+' | '-') Factor)*`, left-associative.
pub fn parse_term(parser: &mut Parser<'_, '_>) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    while let Some(operator) = match_operator(parser, &[TokenKind::Plus, TokenKind::Dash]) {
        let right = parse_factor(parser)?;
        left = Expr::Binary(BinaryExpr::new(left, operator, right));
    }

    Ok(left)
}

/// Multiplicative tier: `Primary (('*' | '/') Primary)*`, left-associative.
pub fn parse_factor(parser: &mut Parser<'_, '_>) -> Result<Expr, Error> {
    let mut left = parse_primary_expr(parser)?;

    while let Some(operator) = match_operator(parser, &[TokenKind::Star, TokenKind::Slash]) {
        let right = parse_primary_expr(parser)?;
        left = Expr::Binary(BinaryExpr::new(left, operator, right));
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser<'_, '_>) -> Result<Expr, Error> {
    match parser.peek().kind {
        TokenKind::Number => {
            let token = parser.advance();
            Ok(Expr::Number(NumberExpr {
                value: token.value.clone(),
                span: token.span.clone(),
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Symbol(SymbolExpr {
                value: token.value.clone(),
                span: token.span.clone(),
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.peek().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Consumes the current token if it is one of `kinds`, returning its operator.
fn match_operator(parser: &mut Parser<'_, '_>, kinds: &[TokenKind]) -> Option<BinaryOperator> {
    kinds
        .iter()
        .find(|kind| parser.match_token(**kind))
        .and_then(|kind| BinaryOperator::from_token_kind(*kind))
}
