//! Syntax tree nodes for the primary-expression grammar slice.
//!
//! Every node carries its start and exclusive-end locations. The wider
//! expression/statement/declaration grammar builds on the same shapes.

use rcc_source::Location;
use rcc_token::{FloatValue, IntValue};

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Name(NameRef),
    Constant(Constant),
    Paren(ParenExpr),
}

impl Expr {
    /// Start location of the expression.
    pub fn start(&self) -> &Location {
        match self {
            Expr::Name(name) => &name.start,
            Expr::Constant(constant) => &constant.start,
            Expr::Paren(paren) => &paren.start,
        }
    }

    /// Exclusive end location of the expression.
    pub fn end(&self) -> &Location {
        match self {
            Expr::Name(name) => &name.end,
            Expr::Constant(constant) => &constant.end,
            Expr::Paren(paren) => &paren.end,
        }
    }
}

/// A reference to a declared name.
#[derive(Clone, Debug, PartialEq)]
pub struct NameRef {
    pub start: Location,
    pub end: Location,
    pub name: String,
}

/// A constant expression: spelled text plus decoded value.
#[derive(Clone, Debug, PartialEq)]
pub struct Constant {
    pub start: Location,
    pub end: Location,
    pub text: String,
    pub value: ConstantValue,
}

/// The decoded value of a constant expression.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Integer(IntValue),
    Floating(FloatValue),
    Character(String),
    Str(String),
}

/// A parenthesized expression.
#[derive(Clone, Debug, PartialEq)]
pub struct ParenExpr {
    pub start: Location,
    pub end: Location,
    pub inner: Box<Expr>,
}

/// An expression statement: `expr ;`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprStmt {
    pub start: Location,
    pub end: Location,
    pub expr: Expr,
}
