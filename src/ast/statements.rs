use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::{
    ast::Node,
    expressions::{Expr, SymbolExpr},
};

/// Assignment of an initializer to a named target.
///
/// The target is a `SymbolExpr` by construction; no other expression can be assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: SymbolExpr,
    pub value: Expr,
    pub span: Span,
}

impl Display for AssignmentStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

/// `int x = <expr>;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub type_name: String,
    pub assignment: AssignmentStmt,
    pub span: Span,
}

impl VarDeclStmt {
    pub fn name(&self) -> &str {
        &self.assignment.target.value
    }

    pub fn value(&self) -> &Expr {
        &self.assignment.value
    }
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.type_name, self.assignment)
    }
}

/// The root of every parse. Declarations are kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<VarDeclStmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, VarDeclStmt> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Indented outline of the whole tree, one node per line.
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        Node::Program(self).write_tree(&mut out);
        out
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", declaration)?;
        }
        Ok(())
    }
}
