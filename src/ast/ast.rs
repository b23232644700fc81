use std::fmt::{Display, Write};

use crate::Span;

use super::{
    expressions::{BinaryExpr, Expr, NumberExpr, SymbolExpr},
    statements::{AssignmentStmt, Program, VarDeclStmt},
};

/// Node Types
///
/// One entry per kind of node the parser can build.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeKind {
    NumberLiteral,
    Identifier,
    BinaryOp,
    Assignment,
    Declaration,
    Program,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Node
///
/// A borrowed view over any node of a parsed tree, for code that walks the
/// tree without caring about the concrete node type.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Number(&'a NumberExpr),
    Symbol(&'a SymbolExpr),
    Binary(&'a BinaryExpr),
    Assignment(&'a AssignmentStmt),
    Declaration(&'a VarDeclStmt),
    Program(&'a Program),
}

impl<'a> Node<'a> {
    pub fn get_kind(&self) -> NodeKind {
        match self {
            Node::Number(_) => NodeKind::NumberLiteral,
            Node::Symbol(_) => NodeKind::Identifier,
            Node::Binary(_) => NodeKind::BinaryOp,
            Node::Assignment(_) => NodeKind::Assignment,
            Node::Declaration(_) => NodeKind::Declaration,
            Node::Program(_) => NodeKind::Program,
        }
    }

    pub fn get_span(&self) -> &'a Span {
        match *self {
            Node::Number(node) => &node.span,
            Node::Symbol(node) => &node.span,
            Node::Binary(node) => &node.span,
            Node::Assignment(node) => &node.span,
            Node::Declaration(node) => &node.span,
            Node::Program(node) => &node.span,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Number(_) | Node::Symbol(_) => vec![],
            Node::Binary(node) => vec![
                Node::from(node.left.as_ref()),
                Node::from(node.right.as_ref()),
            ],
            Node::Assignment(node) => vec![Node::Symbol(&node.target), Node::from(&node.value)],
            Node::Declaration(node) => vec![Node::Assignment(&node.assignment)],
            Node::Program(node) => node.declarations.iter().map(Node::Declaration).collect(),
        }
    }

    /// Number of nodes in the subtree rooted here, this one included.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![*self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }

        count
    }

    fn label(&self) -> String {
        match self {
            Node::Number(node) => format!("NumberLiteral {}", node.value),
            Node::Symbol(node) => format!("Identifier {}", node.value),
            Node::Binary(node) => format!("BinaryOp {}", node.operator),
            Node::Assignment(_) => String::from("Assignment"),
            Node::Declaration(node) => format!("Declaration {}", node.type_name),
            Node::Program(_) => String::from("Program"),
        }
    }

    /// Writes one line per node, pre-order, indented two spaces per level.
    pub(crate) fn write_tree(&self, out: &mut String) {
        let mut stack = vec![(*self, 0)];

        while let Some((node, depth)) = stack.pop() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{}{}", "  ".repeat(depth), node.label());

            stack.extend(node.children().into_iter().rev().map(|child| (child, depth + 1)));
        }
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Number(node) => Node::Number(node),
            Expr::Symbol(node) => Node::Symbol(node),
            Expr::Binary(node) => Node::Binary(node),
        }
    }
}
