use super::Column;
use std::rc::Rc;

/// One parsed input line. Each node owns its children outright.
#[derive(Debug, PartialEq)]
pub enum Node {
    Number(Column, f64),
    Var(Column, Rc<str>),
    Binary(Column, BinaryOp, Box<Node>, Box<Node>),
    Assign(Column, Rc<str>, Box<Node>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Division by zero is not checked and yields an IEEE-754 infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        use BinaryOp::*;
        match self {
            Add => lhs + rhs,
            Sub => lhs - rhs,
            Mul => lhs * rhs,
            Div => lhs / rhs,
        }
    }
}

impl Node {
    pub fn column(&self) -> Column {
        use Node::*;
        match self {
            Number(col, ..) | Var(col, ..) | Binary(col, ..) | Assign(col, ..) => col.clone(),
        }
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self, Node::Assign(..))
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use BinaryOp::*;
        match self {
            Add => write!(f, "+"),
            Sub => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Node::*;
        match self {
            Number(_, n) => write!(f, "{}", n),
            Var(_, name) => write!(f, "{}", name),
            Binary(_, op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Assign(_, name, rhs) => write!(f, "{} = {}", name, rhs),
        }
    }
}
