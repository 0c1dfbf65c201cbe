use crate::{
    ast::expressions::{Expr, LiteralValue},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
};

use super::{
    lookups::{binary_operators, BindingPower, NUD_LOOKUP, UNARY_OPERATORS},
    parser::Parser,
};

/// Parses an expression binding at least as tightly as `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp {
        BindingPower::Default => parse_expr(parser, bp.next()),
        BindingPower::Equality
        | BindingPower::Comparison
        | BindingPower::Term
        | BindingPower::Factor => parse_binary_expr(parser, bp),
        BindingPower::Unary => parse_unary_expr(parser),
        BindingPower::Primary => parse_primary_expr(parser),
    }
}

/// One binary precedence level: operands come from the next level up and
/// same-level operators fold to the left.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_expr(parser, bp.next())?;

    while parser.match_kinds(binary_operators(bp)) {
        let operator = parser.previous().clone();
        let right = parse_expr(parser, bp.next())?;

        left = Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        };
    }

    Ok(left)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_kinds(UNARY_OPERATORS) {
        let operator = parser.previous().clone();
        let right = parse_unary_expr(parser)?;

        return Ok(Expr::Unary {
            operator,
            right: Box::new(right),
        });
    }

    parse_expr(parser, BindingPower::Primary)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match NUD_LOOKUP.get(&parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(expected_expression(parser)),
    }
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = match (parser.current_token_kind(), &parser.current_token().literal) {
        (TokenKind::True, _) => LiteralValue::Bool(true),
        (TokenKind::False, _) => LiteralValue::Bool(false),
        (TokenKind::Nil, _) => LiteralValue::Nil,
        (TokenKind::Number, Some(Literal::Number(number))) => LiteralValue::Number(*number),
        (TokenKind::String, Some(Literal::String(string))) => LiteralValue::String(string.clone()),
        _ => return Err(expected_expression(parser)),
    };

    parser.advance();
    Ok(Expr::Literal { value })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "expect ')' after expression.")?;

    Ok(Expr::Grouping {
        expression: Box::new(expression),
    })
}

fn expected_expression(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::ExpectedExpression {
            token: parser.current_token().lexeme.clone(),
        },
        parser.get_position(),
    )
}
