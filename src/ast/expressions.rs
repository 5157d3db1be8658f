use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expression, statements::BlockStmt};

/// Symbol Expression
/// Represents an identifier in the AST. This includes function names.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// Represents a decimal integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// Boolean Expression
/// Represents a `true` or `false` literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// Prefix Expression
/// Represents a unary operation (`!x`, `-x`) in the AST.
///
/// Canonical form: `(<operator><operand>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Binary Expression
/// Represents an infix operation between two expressions in the AST.
///
/// Canonical form: `(<left> <operator> <right>)`, fully parenthesized so the
/// tree shape is unambiguous in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If Expression
/// Represents a conditional with an optional alternative branch.
///
/// `if` is an expression in this language, not a statement; its value is the
/// last expression of the taken branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }

        Ok(())
    }
}

/// Function Expression
/// Represents a function literal: `fn(<params>) { <body> }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub token: Token,
    pub parameters: Vec<SymbolExpr>,
    pub body: BlockStmt,
}

impl Display for FnExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<String>>();

        write!(
            f,
            "{}({}) {}",
            self.token.value,
            parameters.join(", "),
            self.body
        )
    }
}

/// Call Expression
/// Represents a function call in the AST. The callee is any expression that
/// evaluates to a function (a symbol or a function literal).
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
