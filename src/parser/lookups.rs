use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence levels, lowest binding first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Primary,
}

impl BindingPower {
    /// The level whose expressions are the operands of this one.
    pub fn next(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Comparison,
            BindingPower::Comparison => BindingPower::Term,
            BindingPower::Term => BindingPower::Factor,
            BindingPower::Factor => BindingPower::Unary,
            BindingPower::Unary | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub const UNARY_OPERATORS: &[TokenKind] = &[TokenKind::Not, TokenKind::Dash];

/// Infix operators folded at the given level.
pub fn binary_operators(binding_power: BindingPower) -> &'static [TokenKind] {
    match binding_power {
        BindingPower::Equality => &[TokenKind::NotEquals, TokenKind::Equals],
        BindingPower::Comparison => &[
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
        ],
        BindingPower::Term => &[TokenKind::Dash, TokenKind::Plus],
        BindingPower::Factor => &[TokenKind::Slash, TokenKind::Star],
        BindingPower::Default | BindingPower::Unary | BindingPower::Primary => &[],
    }
}

lazy_static! {
    pub static ref NUD_LOOKUP: NUDLookup = {
        let mut map: NUDLookup = HashMap::new();
        // Literals
        map.insert(TokenKind::Number, parse_literal_expr);
        map.insert(TokenKind::String, parse_literal_expr);
        map.insert(TokenKind::True, parse_literal_expr);
        map.insert(TokenKind::False, parse_literal_expr);
        map.insert(TokenKind::Nil, parse_literal_expr);

        map.insert(TokenKind::OpenParen, parse_grouping_expr);
        map
    };

    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::Print, parse_print_stmt);
        map
    };
}

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
