use std::fmt::{Debug, Display};

use crate::{lexer::tokens::TokenKind, Span};

/// Expression
///
/// Every expression an initializer can contain. Children are boxed and owned
/// by their parent, so an expression is always a strict tree.
///
/// An initializer such as `a + 1 + 1 + ...` nests one level per operator, so
/// everything that walks a whole expression (drop, clone, comparison,
/// formatting) runs on an explicit work stack rather than the call stack.
/// `Debug` prints the same s-expression as `Display`.
pub enum Expr {
    Number(NumberExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Visit(&'a Expr),
            Join(&'a BinaryExpr),
        }

        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<Expr> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Number(expr)) => built.push(Expr::Number(expr.clone())),
                Step::Visit(Expr::Symbol(expr)) => built.push(Expr::Symbol(expr.clone())),
                Step::Visit(Expr::Binary(expr)) => {
                    steps.push(Step::Join(expr));
                    steps.push(Step::Visit(&expr.right));
                    steps.push(Step::Visit(&expr.left));
                }
                Step::Join(expr) => {
                    let right = built.pop().expect("right operand is built before its operator");
                    let left = built.pop().expect("left operand is built before its operator");
                    built.push(Expr::Binary(BinaryExpr {
                        left: Box::new(left),
                        operator: expr.operator,
                        right: Box::new(right),
                        span: expr.span.clone(),
                    }));
                }
            }
        }

        built.pop().expect("the root expression is always built")
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Expr::Number(a), Expr::Number(b)) if a == b => {}
                (Expr::Symbol(a), Expr::Symbol(b)) if a == b => {}
                (Expr::Binary(a), Expr::Binary(b))
                    if a.operator == b.operator && a.span == b.span =>
                {
                    pending.push((a.right.as_ref(), b.right.as_ref()));
                    pending.push((a.left.as_ref(), b.left.as_ref()));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'a> {
            Operand(&'a Expr),
            Text(&'static str),
        }

        let mut pieces = vec![Piece::Operand(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Operand(Expr::Number(expr)) => write!(f, "{}", expr)?,
                Piece::Operand(Expr::Symbol(expr)) => write!(f, "{}", expr)?,
                Piece::Operand(Expr::Binary(expr)) => {
                    // Pushed in reverse: `(`, operator, left, right, `)`.
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Operand(&expr.right));
                    pieces.push(Piece::Text(" "));
                    pieces.push(Piece::Operand(&expr.left));
                    pieces.push(Piece::Text(" "));
                    pieces.push(Piece::Text(expr.operator.symbol()));
                    pieces.push(Piece::Text("("));
                }
            }
        }

        Ok(())
    }
}

impl Debug for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

// LITERALS

/// Number Expression
/// Holds the literal digits exactly as written; no numeric conversion happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: String,
    pub span: Span,
}

impl Display for NumberExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Symbol Expression
/// A reference to a variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// Displays as an s-expression, e.g. `(+ 1 (* 2 3))`.
#[derive(Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub span: Span,
}

impl BinaryExpr {
    /// Joins two operands; the span runs from the start of `left` to the end of `right`.
    pub fn new(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        let span = Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        };

        BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        }
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.operator, self.left, self.right)
    }
}

impl Debug for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Drop for BinaryExpr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_operands(&mut stack);

        while let Some(expr) = stack.pop() {
            if let Expr::Binary(mut expr) = expr {
                // Left with two leaves, `expr` then drops without nesting.
                expr.take_operands(&mut stack);
            }
        }
    }
}

impl BinaryExpr {
    /// Moves nested binary operands onto `stack`, leaving leaves in their place.
    fn take_operands(&mut self, stack: &mut Vec<Expr>) {
        for operand in [&mut self.left, &mut self.right] {
            if matches!(operand.as_ref(), Expr::Binary(_)) {
                let leaf = Expr::Number(NumberExpr {
                    value: String::new(),
                    span: self.span.clone(),
                });
                stack.push(std::mem::replace(operand.as_mut(), leaf));
            }
        }
    }
}
