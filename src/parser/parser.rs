//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry
//! points. The parser walks the token stream with a single forward cursor
//! and one token of lookahead; it never rewinds.

use std::rc::Rc;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    stmt::{parse_program_start, parse_stmt},
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A missing `EOF` sentinel is appended so the cursor always has a
    /// token to look at.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map(|token| token.line).unwrap_or(1);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, line));
        }

        Parser { tokens, pos: 0, file }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Advances to the next token and returns the consumed one.
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        if self.has_tokens() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Whether the current token is of the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Consumes the current token if it is one of `kinds`.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind, failing with `message`.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `ExpectedToken` error on the current line.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.check(expected_kind) {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    message: String::from(message),
                    token: self.current_token().lexeme.clone(),
                },
                self.get_position(),
            ))
        }
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the line of the current token in the source file.
    pub fn get_position(&self) -> Position {
        Position(self.current_token().line, Rc::clone(&self.file))
    }
}

/// Parses a stream of tokens into a program.
///
/// A program made of one expression with no trailing `;` is read as an
/// echo program and yields a single print statement.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Vec<Stmt>, Error> {
    let mut parser = Parser::new(tokens, file);
    let mut body = vec![];

    if parser.has_tokens() {
        body.push(parse_program_start(&mut parser)?);
    }

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    Ok(body)
}

/// Parses a stream of tokens holding exactly one expression.
pub fn parse_expression(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, file);
    let expression = parse_expr(&mut parser, BindingPower::Default)?;

    parser.expect(TokenKind::EOF, "expect end of input after expression.")?;

    Ok(expression)
}
