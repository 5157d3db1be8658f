use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expression, Statement},
    expressions::SymbolExpr,
};

/// Let Statement
/// Binds the value of an expression to a name: `let x = 5;`.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: SymbolExpr,
    pub value: Expression,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.name, self.value)
    }
}

/// Return Statement
/// Returns the value of an expression from the enclosing function.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expression,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token.value, self.value)
    }
}

/// Expression Statement
/// A bare expression in statement position, e.g. `x + 10;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expression,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.expression.fmt(f)
    }
}

/// Block Statement
/// A brace-delimited statement sequence, the body of `if` branches and
/// function literals.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }

        Ok(())
    }
}
