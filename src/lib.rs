#![allow(clippy::module_inception)]

//! Syntax frontend for the Monkey scripting language.
//!
//! The crate turns raw source text into an abstract syntax tree in two
//! stages: the [`lexer`] produces classified tokens one at a time, and the
//! [`parser`] consumes them with a Pratt (precedence-climbing) strategy to
//! build a [`ast::ast::Program`]. Evaluation of the tree is left to
//! external consumers; the crate performs no I/O.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

/// A byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

/// The half-open byte range a token or node was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }
}
