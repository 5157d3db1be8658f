//! Lexical analysis module for the frontend.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization, one token per `next_token` call
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Two-character lookahead for `==` and `!=`
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
