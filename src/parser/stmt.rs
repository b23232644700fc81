use crate::{
    ast::{
        expressions::SymbolExpr,
        statements::{AssignmentStmt, VarDeclStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expr, parser::Parser};

/// `int <identifier> = <expression> ;`
pub fn parse_var_decl_stmt(parser: &mut Parser<'_, '_>) -> Result<VarDeclStmt, Error> {
    let type_token = parser.consume(TokenKind::Int, "expected type keyword")?;
    let name_token = parser.consume(TokenKind::Identifier, "expected identifier")?;
    parser.consume(TokenKind::Assignment, "expected '=' after variable name")?;

    let value = parse_expr(parser)?;

    let semicolon = parser.consume(TokenKind::Semicolon, "expected ';' after expression")?;

    let target = SymbolExpr {
        value: name_token.value,
        span: name_token.span,
    };

    let assignment = AssignmentStmt {
        span: Span {
            start: target.span.start.clone(),
            end: value.get_span().end.clone(),
        },
        target,
        value,
    };

    Ok(VarDeclStmt {
        type_name: type_token.value,
        assignment,
        span: Span {
            start: type_token.span.start,
            end: semicolon.span.end,
        },
    })
}
