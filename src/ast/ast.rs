use std::fmt::Display;

use super::{
    expressions::{
        BinaryExpr, BooleanExpr, CallExpr, FnExpr, IfExpr, IntegerExpr, PrefixExpr, SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// The closed family of statement nodes.
///
/// Every variant exposes the literal of its leading token for diagnostics
/// and a canonical string rendering through [`Display`].
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.value,
            Statement::Return(stmt) => &stmt.token.value,
            Statement::Expression(stmt) => &stmt.token.value,
            Statement::Block(stmt) => &stmt.token.value,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
            Statement::Block(stmt) => stmt.fmt(f),
        }
    }
}

/// The closed family of expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Symbol(SymbolExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    Fn(FnExpr),
    Call(CallExpr),
}

impl Expression {
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Symbol(expr) => &expr.token.value,
            Expression::Integer(expr) => &expr.token.value,
            Expression::Boolean(expr) => &expr.token.value,
            Expression::Prefix(expr) => &expr.token.value,
            Expression::Binary(expr) => &expr.token.value,
            Expression::If(expr) => &expr.token.value,
            Expression::Fn(expr) => &expr.token.value,
            Expression::Call(expr) => &expr.token.value,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Symbol(expr) => expr.fmt(f),
            Expression::Integer(expr) => expr.fmt(f),
            Expression::Boolean(expr) => expr.fmt(f),
            Expression::Prefix(expr) => expr.fmt(f),
            Expression::Binary(expr) => expr.fmt(f),
            Expression::If(expr) => expr.fmt(f),
            Expression::Fn(expr) => expr.fmt(f),
            Expression::Call(expr) => expr.fmt(f),
        }
    }
}

/// The root of every parse tree: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }

        Ok(())
    }
}
