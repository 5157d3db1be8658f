use crate::{
    ast::{
        ast::Statement,
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Parses one statement, leaving the cursor on the statement's final token.
/// Anything that is not a `let` or `return` is an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = SymbolExpr {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Statement::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Statement::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // The trailing semicolon is optional so that REPL-style one-liners like
    // `x + 10` stay valid.
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStmt { token, expression }))
}

/// Parses a `{ ... }` block, leaving the cursor on the closing brace. Used
/// by `if` branches and function bodies, never at the top level.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();

    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    if parser.current_token_kind() != TokenKind::CloseCurly {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseCurly.to_string(),
                found: TokenKind::EOF.to_string(),
            },
            parser.current_token().span.start,
        ));
    }

    Ok(BlockStmt { token, statements })
}
