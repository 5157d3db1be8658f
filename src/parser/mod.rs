//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with binding power for precedence handling:
//!
//! - Statement parsing (let bindings, returns, expression statements)
//! - Expression parsing (binary ops, prefix ops, conditionals, function
//!   literals, calls)
//! - Error collection with recovery at statement boundaries
//!
//! Prefix and infix handlers are dispatched through static lookup tables
//! keyed by token kind, built once and shared by every parser instance.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
