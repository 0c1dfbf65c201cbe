use crate::{
    ast::statements::Stmt,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::STMT_LOOKUP, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = STMT_LOOKUP.get(&parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// First statement of a program. An expression directly followed by `EOF`
/// is echoed: it becomes a print statement and needs no `;`.
pub fn parse_program_start(parser: &mut Parser) -> Result<Stmt, Error> {
    if STMT_LOOKUP.contains_key(&parser.current_token_kind()) {
        return parse_stmt(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    if !parser.has_tokens() {
        return Ok(Stmt::Print { expression });
    }

    parser.expect(TokenKind::Semicolon, "expect ';' after expression.")?;

    Ok(Stmt::Expression { expression })
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon, "expect ';' after expression.")?;

    Ok(Stmt::Expression { expression })
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon, "expect ';' after value.")?;

    Ok(Stmt::Print { expression })
}
