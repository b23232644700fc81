//! Unit tests for AST construction, traversal and rendering.

use std::rc::Rc;

use crate::{errors::diagnostics::DiagnosticCollector, parse_source, Position, Span};

use super::{
    ast::{Node, NodeKind},
    expressions::{BinaryExpr, BinaryOperator, Expr, NumberExpr, SymbolExpr},
    statements::Program,
};

fn span(start: u32, end: u32) -> Span {
    let file = Rc::new("test.decl".to_string());
    Span {
        start: Position(start, Rc::clone(&file)),
        end: Position(end, file),
    }
}

fn program(source: &str) -> Program {
    let mut diagnostics = DiagnosticCollector::new();
    parse_source(source, Some("test.decl".to_string()), &mut diagnostics)
        .expect("source should parse")
}

#[test]
fn test_binary_expr_span_covers_operands() {
    let left = Expr::Number(NumberExpr {
        value: "1".to_string(),
        span: span(8, 9),
    });
    let right = Expr::Symbol(SymbolExpr {
        value: "b".to_string(),
        span: span(12, 13),
    });

    let binary = BinaryExpr::new(left, BinaryOperator::Subtract, right);

    assert_eq!(binary.span, span(8, 13));
    assert_eq!(binary.to_string(), "(- 1 b)");
}

#[test]
fn test_binary_operator_from_token_kind() {
    use crate::lexer::tokens::TokenKind;

    assert_eq!(
        BinaryOperator::from_token_kind(TokenKind::Plus),
        Some(BinaryOperator::Add)
    );
    assert_eq!(
        BinaryOperator::from_token_kind(TokenKind::Dash),
        Some(BinaryOperator::Subtract)
    );
    assert_eq!(
        BinaryOperator::from_token_kind(TokenKind::Star),
        Some(BinaryOperator::Multiply)
    );
    assert_eq!(
        BinaryOperator::from_token_kind(TokenKind::Slash),
        Some(BinaryOperator::Divide)
    );
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Assignment), None);
}

#[test]
fn test_program_display() {
    let program = program("int a = 1;\nint b = a*2 - 3;");

    assert_eq!(program.to_string(), "int a = 1;\nint b = (- (* a 2) 3);");
}

#[test]
fn test_node_kinds_and_children() {
    let program = program("int x = 1 + y;");
    let root = Node::Program(&program);

    assert_eq!(root.get_kind(), NodeKind::Program);

    let declarations = root.children();
    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].get_kind(), NodeKind::Declaration);

    let assignment = declarations[0].children();
    assert_eq!(assignment.len(), 1);
    assert_eq!(assignment[0].get_kind(), NodeKind::Assignment);

    let parts = assignment[0].children();
    let kinds: Vec<NodeKind> = parts.iter().map(Node::get_kind).collect();
    assert_eq!(kinds, vec![NodeKind::Identifier, NodeKind::BinaryOp]);

    let operands: Vec<NodeKind> = parts[1].children().iter().map(Node::get_kind).collect();
    assert_eq!(operands, vec![NodeKind::NumberLiteral, NodeKind::Identifier]);
    assert!(parts[1].children()[0].children().is_empty());
}

#[test]
fn test_program_is_never_a_child() {
    let program = program("int a = 1; int b = a + 2 * 3; int c = b / a - 1;");

    fn walk(node: Node<'_>, depth: usize) {
        if depth > 0 {
            assert_ne!(node.get_kind(), NodeKind::Program);
        }
        for child in node.children() {
            walk(child, depth + 1);
        }
    }

    walk(Node::Program(&program), 0);
}

#[test]
fn test_node_count() {
    let program = program("int x = 1 + 2 * 3;");

    // Program, Declaration, Assignment, Identifier, two BinaryOps, three numbers.
    assert_eq!(Node::Program(&program).count(), 9);
    assert_eq!(Node::Program(&program).get_span().start.0, 0);
}

#[test]
fn test_tree_string() {
    let program = program("int x = 1 - 2 - 3;");

    let expected = "\
Program
  Declaration int
    Assignment
      Identifier x
      BinaryOp -
        BinaryOp -
          NumberLiteral 1
          NumberLiteral 2
        NumberLiteral 3
";
    assert_eq!(program.to_tree_string(), expected);
}

#[test]
fn test_empty_tree_string() {
    assert_eq!(program("").to_tree_string(), "Program\n");
}

#[test]
fn test_deep_expression_tree_string() {
    const OPERATORS: usize = 2_000;

    let source = format!("int x = a{};", " * 2".repeat(OPERATORS));
    let tree = program(&source).to_tree_string();
    let lines: Vec<&str> = tree.lines().collect();

    assert_eq!(lines.len(), 4 + 2 * OPERATORS + 1);
    assert_eq!(lines[4], "      BinaryOp *");

    // Pre-order walks the whole left spine before any right operand.
    let innermost = 4 + OPERATORS - 1;
    assert_eq!(lines[innermost + 1].trim_start(), "Identifier a");
    assert_eq!(lines[innermost + 2].trim_start(), "NumberLiteral 2");
    assert_eq!(lines.last().map(|line| line.trim_start()), Some("NumberLiteral 2"));
}

#[test]
fn test_expression_clone_and_compare() {
    let value = program("int x = 1 + 2 * y - 3;").declarations[0].value().clone();
    let other = program("int x = 1 + 2 * z - 3;").declarations[0].value().clone();

    assert_eq!(value, value.clone());
    assert_ne!(value, other);
    assert_eq!(format!("{:?}", value), "(- (+ 1 (* 2 y)) 3)");
}
