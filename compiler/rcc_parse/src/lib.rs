//! Buffered speculative token stream and the minimal grammar layer.
//!
//! [`TokenStream`] is the sole lexical interface a grammar consumes:
//! `peek(k)` / `advance()` for lookahead and consumption, and
//! `mark()` / `release()` / `seek()` for speculative parse attempts with
//! backtracking. [`Parser`] is the grammar slice built on that contract
//! (primary expressions and expression statements), holding the shared
//! [`Reporter`] for unexpected-token diagnostics.

pub mod ast;
mod stream;

pub use stream::TokenStream;

use crate::ast::{Constant, ConstantValue, Expr, ExprStmt, NameRef, ParenExpr};
use rcc_diagnostic::{ErrorKind, Reporter};
use rcc_source::Location;
use rcc_token::TokenKind;
use thiserror::Error;

/// A failed production.
///
/// Reported to the shared [`Reporter`] at the point of failure and also
/// returned by value, so a caller can abandon the attempt (typically a
/// speculative one under `mark()`/`release()`) without unwinding.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{location}: {message}")]
pub struct ParseError {
    pub location: Location,
    pub message: String,
}

/// Recursive-descent grammar over a [`TokenStream`].
pub struct Parser<'a> {
    tokens: TokenStream<'a>,
    reporter: &'a Reporter,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`, reporting to `reporter`.
    pub fn new(tokens: TokenStream<'a>, reporter: &'a Reporter) -> Self {
        Parser { tokens, reporter }
    }

    /// The underlying stream, for lookahead decisions.
    pub fn tokens(&mut self) -> &mut TokenStream<'a> {
        &mut self.tokens
    }

    /// Run `f` speculatively: the stream position is restored afterwards
    /// regardless of what `f` consumed.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.tokens.mark();
        let out = f(self);
        self.tokens.release();
        out
    }

    /// Expect the next token to be of `kind` (literal payloads ignored),
    /// consume it, and return its start and end locations.
    fn expect(&mut self, kind: &TokenKind) -> Result<(Location, Location), ParseError> {
        let tok = self.tokens.peek(1);
        if tok.kind.same_kind(kind) {
            let span = (tok.start.clone(), tok.end.clone());
            self.tokens.advance();
            Ok(span)
        } else {
            Err(self.unexpected(format!("expected {}", kind.display_name())))
        }
    }

    /// Record an unexpected-token error and build the matching
    /// [`ParseError`]. The token is not consumed; it stays observable
    /// for an alternative production.
    fn unexpected(&mut self, message: String) -> ParseError {
        let location = self.tokens.peek(1).start.clone();
        self.reporter
            .error_with(location.clone(), ErrorKind::UnexpectedToken, message.clone());
        ParseError { location, message }
    }

    /// Parse an expression statement: `expr ;`.
    pub fn parse_stmt(&mut self) -> Result<ExprStmt, ParseError> {
        let expr = self.parse_expr()?;
        let (_, end) = self.expect(&TokenKind::Semicolon)?;
        Ok(ExprStmt {
            start: expr.start().clone(),
            end,
            expr,
        })
    }

    /// Parse an expression.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_primary_expr()
    }

    /// Parse a primary expression: a name reference, a constant, or a
    /// parenthesized expression.
    pub fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        let tok = self.tokens.peek(1).clone();
        match tok.kind {
            TokenKind::Ident => {
                self.tokens.advance();
                Ok(Expr::Name(NameRef {
                    start: tok.start,
                    end: tok.end,
                    name: tok.text.to_string(),
                }))
            }
            TokenKind::IntConstant(value) => {
                self.tokens.advance();
                Ok(constant_expr(&tok.start, &tok.end, tok.text, ConstantValue::Integer(value)))
            }
            TokenKind::FloatConstant(value) => {
                self.tokens.advance();
                Ok(constant_expr(&tok.start, &tok.end, tok.text, ConstantValue::Floating(value)))
            }
            TokenKind::CharConstant(decoded) => {
                self.tokens.advance();
                Ok(constant_expr(&tok.start, &tok.end, tok.text, ConstantValue::Character(decoded)))
            }
            TokenKind::StrConstant(decoded) => {
                self.tokens.advance();
                Ok(constant_expr(&tok.start, &tok.end, tok.text, ConstantValue::Str(decoded)))
            }
            TokenKind::LParen => {
                self.tokens.advance();
                let inner = self.parse_expr()?;
                let (_, end) = self.expect(&TokenKind::RParen)?;
                Ok(Expr::Paren(ParenExpr {
                    start: tok.start,
                    end,
                    inner: Box::new(inner),
                }))
            }
            _ => Err(self.unexpected(
                "expected identifier, constant, or parenthesized expression".to_string(),
            )),
        }
    }

}

/// Build a constant expression node from a consumed token.
fn constant_expr(start: &Location, end: &Location, text: &str, value: ConstantValue) -> Expr {
    Expr::Constant(Constant {
        start: start.clone(),
        end: end.clone(),
        text: text.to_string(),
        value,
    })
}
