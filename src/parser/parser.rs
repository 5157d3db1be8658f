//! Parser state machine and the `parse_program` entry point.
//!
//! The parser buffers two tokens pulled from the lexer in lockstep
//! (`current` and `peek`) and keeps no other state between statements.
//! Syntax errors are collected into an ordered list rather than aborting
//! the run; after an error the parser resynchronizes at the next statement
//! boundary so a caller sees every error in one pass.

use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{BindingPower, BINDING_POWER_LOOKUP},
    stmt::parse_stmt,
};

/// The main parser structure.
///
/// Owns its lexer and the two buffered tokens. One parser per parse; the
/// shared lookup tables live in [`super::lookups`] and are read-only.
pub struct Parser {
    lexer: Lexer,
    /// The token currently being classified
    current: Token,
    /// One-token lookahead, needed to decide whether an operator follows
    peek: Token,
    /// Syntax errors collected so far, in source order
    errors: Vec<Error>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the buffered lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances both buffered tokens and returns the token that was current.
    pub fn advance(&mut self) -> Token {
        mem::replace(
            &mut self.current,
            mem::replace(&mut self.peek, self.lexer.next_token()),
        )
    }

    /// Consumes the lookahead token if it has the expected kind, making it
    /// current and returning it. Otherwise reports expected vs. found.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected.to_string(),
                    found: self.peek.kind.to_string(),
                },
                self.peek.span.start,
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Binding power of the lookahead token, `Lowest` when it is not an
    /// infix operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        *BINDING_POWER_LOOKUP
            .get(&self.peek.kind)
            .unwrap_or(&BindingPower::Lowest)
    }

    /// The syntax errors collected so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Parses statements until end-of-input and returns the Program.
    ///
    /// A failed statement contributes an error to [`Parser::errors`] and the
    /// parser skips ahead to the next statement boundary, so the returned
    /// Program may be partial but the run never aborts.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.current.kind != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        Program { statements }
    }

    /// Skips tokens until the next statement boundary (`;` or end-of-input)
    /// so parsing can continue after an error.
    ///
    /// A boundary found inside a brace block leaves the closing braces next
    /// in line; no statement can start with `}`, so those are skipped too.
    fn synchronize(&mut self) {
        while self.current.kind != TokenKind::Semicolon && self.current.kind != TokenKind::EOF {
            self.advance();
        }

        while self.peek.kind == TokenKind::CloseCurly {
            self.advance();
        }
    }
}

/// Parses a complete source string into a Program plus the list of syntax
/// errors encountered. The list is empty when the source is well formed.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let program = parser.parse_program();

    (program, parser.errors)
}
