//! Token classification for the rcc front end.
//!
//! Defines the closed set of token kinds ([`TokenKind`]), the static
//! keyword table ([`keyword_lookup`]), the decoded literal values carried
//! by constant tokens ([`IntValue`], [`FloatValue`], [`Base`]), and the
//! [`Token`] value the scanner produces: kind, start/end locations, and
//! the exact spelled source text.

mod keywords;
mod kind;
mod token;
mod value;

pub use keywords::keyword_lookup;
pub use kind::TokenKind;
pub use token::Token;
pub use value::{Base, FloatValue, IntValue};
