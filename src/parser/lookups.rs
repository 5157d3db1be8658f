use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expression, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binding power of an operator, ordered lowest to highest. An operator with
/// higher binding power takes the operand it shares with a lower-power
/// neighbor.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type PrefixHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type InfixHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, Error>;

pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type BindingPowerLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    /// Binding power per infix operator. Kinds absent from this table are
    /// treated as `Lowest` when peeked at by the climbing loop.
    pub static ref BINDING_POWER_LOOKUP: BindingPowerLookup = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, BindingPower::Equals);
        map.insert(TokenKind::NotEquals, BindingPower::Equals);
        map.insert(TokenKind::Less, BindingPower::LessGreater);
        map.insert(TokenKind::Greater, BindingPower::LessGreater);
        map.insert(TokenKind::Plus, BindingPower::Sum);
        map.insert(TokenKind::Dash, BindingPower::Sum);
        map.insert(TokenKind::Slash, BindingPower::Product);
        map.insert(TokenKind::Star, BindingPower::Product);
        map.insert(TokenKind::OpenParen, BindingPower::Call);
        map
    };

    /// Handlers for tokens that can begin an expression.
    pub static ref PREFIX_LOOKUP: PrefixLookup = {
        let mut map: PrefixLookup = HashMap::new();

        // Literals and symbols
        map.insert(TokenKind::Identifier, parse_primary_expr);
        map.insert(TokenKind::Integer, parse_primary_expr);
        map.insert(TokenKind::True, parse_primary_expr);
        map.insert(TokenKind::False, parse_primary_expr);

        // Prefix operators and grouping
        map.insert(TokenKind::Not, parse_prefix_expr);
        map.insert(TokenKind::Dash, parse_prefix_expr);
        map.insert(TokenKind::OpenParen, parse_grouping_expr);

        // Compound expressions
        map.insert(TokenKind::If, parse_if_expr);
        map.insert(TokenKind::Fn, parse_fn_expr);

        map
    };

    /// Handlers for tokens that can continue an expression from the left.
    pub static ref INFIX_LOOKUP: InfixLookup = {
        let mut map: InfixLookup = HashMap::new();

        map.insert(TokenKind::Equals, parse_binary_expr);
        map.insert(TokenKind::NotEquals, parse_binary_expr);
        map.insert(TokenKind::Less, parse_binary_expr);
        map.insert(TokenKind::Greater, parse_binary_expr);
        map.insert(TokenKind::Plus, parse_binary_expr);
        map.insert(TokenKind::Dash, parse_binary_expr);
        map.insert(TokenKind::Slash, parse_binary_expr);
        map.insert(TokenKind::Star, parse_binary_expr);

        // A parenthesis after a complete expression is a call
        map.insert(TokenKind::OpenParen, parse_call_expr);

        map
    };
}
