use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, FnExpr, IfExpr, IntegerExpr, PrefixExpr,
            SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, INFIX_LOOKUP, PREFIX_LOOKUP},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// The precedence-climbing core.
///
/// Parses the left side via the prefix handler for the current token, then
/// keeps consuming infix operators while the lookahead binds tighter than
/// `bp`. Equal levels stay with the left operand, which makes operator
/// chains left-associative.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    let kind = parser.current_token_kind();

    let prefix = match PREFIX_LOOKUP.get(&kind) {
        Some(handler) => *handler,
        None if kind == TokenKind::Illegal => {
            return Err(Error::new(
                ErrorImpl::IllegalCharacter {
                    character: parser.current_token().value.clone(),
                },
                parser.current_token().span.start,
            ));
        }
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixRule {
                    token: kind.to_string(),
                },
                parser.current_token().span.start,
            ));
        }
    };

    let mut left = prefix(parser)?;

    while bp < parser.peek_binding_power() {
        let infix = match INFIX_LOOKUP.get(&parser.peek_token_kind()) {
            Some(handler) => *handler,
            None => break,
        };

        let operator_bp = parser.peek_binding_power();
        parser.advance();

        left = infix(parser, left, operator_bp)?;
    }

    Ok(left)
}

/// Identifier, integer, and boolean literals. Leaves the cursor on the
/// literal itself; the climbing loop decides from the lookahead.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Identifier => Ok(Expression::Symbol(SymbolExpr {
            value: token.value.clone(),
            token,
        })),
        TokenKind::Integer => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expression::Integer(IntegerExpr { token, value })),
            Err(_) => Err(Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.value.clone(),
                },
                token.span.start,
            )),
        },
        TokenKind::True | TokenKind::False => Ok(Expression::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixRule {
                token: token.kind.to_string(),
            },
            token.span.start,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Binary(BinaryExpr {
        left: Box::new(left),
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

/// Parenthesized grouping: the inner expression restarts at `Lowest` and
/// the closing parenthesis is mandatory.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();

    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;

    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;

        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expression::Fn(FnExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_fn_parameters(parser: &mut Parser) -> Result<Vec<SymbolExpr>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    let first = parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(SymbolExpr {
        value: first.value.clone(),
        token: first,
    });

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();

        let next = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(SymbolExpr {
            value: next.value.clone(),
            token: next,
        });
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

/// Call expressions are the infix rule for `(` at the highest binding
/// power: anything already parsed to the left becomes the callee.
pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(Expression::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expression>, Error> {
    let mut arguments = Vec::new();

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(arguments);
    }

    parser.advance();
    arguments.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();

        arguments.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(arguments)
}
