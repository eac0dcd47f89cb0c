//! The closed set of token kinds.
//!
//! Literal-bearing kinds carry their decoded value in the variant, so a
//! non-literal token cannot carry a value and a literal token cannot lose
//! its kind. A constant that failed validation is [`TokenKind::Invalid`]
//! and carries nothing; the token still spans the malformed lexeme.
//!
//! Digraph spellings (`<:` `:>` `<%` `%>` `%:` `%:%:`) lex to the same
//! kinds as their canonical spellings; only the spelled text differs.

use crate::{FloatValue, IntValue};

/// One classified lexical unit's kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Malformed input; a diagnostic has been reported.
    Invalid,
    /// End of input. Repeatable: scanning past the end keeps yielding EOF.
    Eof,

    /// Identifier (spelled text on the token itself).
    Ident,

    /// `// ...` comment, newline excluded.
    LineComment,
    /// `/* ... */` comment.
    BlockComment,

    /// Integer constant with its decoded magnitude and base.
    IntConstant(IntValue),
    /// Floating constant with its decoded value.
    FloatConstant(FloatValue),
    /// Character constant with its escape-decoded text.
    CharConstant(String),
    /// String constant with its escape-decoded text.
    StrConstant(String),

    // Punctuators
    LBrace,    // { (also <%)
    RBrace,    // } (also %>)
    LParen,    // (
    RParen,    // )
    LBracket,  // [ (also <:)
    RBracket,  // ] (also :>)
    Dot,       // .
    Ellipsis,  // ...
    Semicolon, // ;
    Comma,     // ,
    Lt,        // <
    Gt,        // >
    LtEq,      // <=
    GtEq,      // >=
    EqEq,      // ==
    BangEq,    // !=
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Percent,   // %
    PlusPlus,  // ++
    MinusMinus, // --
    Shl,       // <<
    Shr,       // >>
    Amp,       // &
    Pipe,      // |
    Caret,     // ^
    Bang,      // !
    Tilde,     // ~
    AmpAmp,    // &&
    PipePipe,  // ||
    Question,  // ?
    Colon,     // :
    Arrow,     // ->
    Eq,        // =
    PlusEq,    // +=
    MinusEq,   // -=
    StarEq,    // *=
    SlashEq,   // /=
    PercentEq, // %=
    ShlEq,     // <<=
    ShrEq,     // >>=
    AmpEq,     // &=
    PipeEq,    // |=
    CaretEq,   // ^=
    Hash,      // # (also %:)
    HashHash,  // ## (also %:%:)

    // Keywords
    Auto,
    Break,
    Case,
    Char,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extern,
    Float,
    For,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Register,
    Restrict,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    Struct,
    Switch,
    Typedef,
    Union,
    Unsigned,
    Void,
    Volatile,
    While,
    Alignas,      // _Alignas
    Alignof,      // _Alignof
    Atomic,       // _Atomic
    Bool,         // _Bool
    Complex,      // _Complex
    Generic,      // _Generic
    Imaginary,    // _Imaginary
    Noreturn,     // _Noreturn
    StaticAssert, // _Static_assert
    ThreadLocal,  // _Thread_local
}

impl TokenKind {
    /// True for the two comment kinds, which the token stream filters out
    /// before the grammar layer sees them.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// True for the four constant kinds.
    pub fn is_constant(&self) -> bool {
        matches!(
            self,
            TokenKind::IntConstant(_)
                | TokenKind::FloatConstant(_)
                | TokenKind::CharConstant(_)
                | TokenKind::StrConstant(_)
        )
    }

    /// True for keyword kinds.
    pub fn is_keyword(&self) -> bool {
        crate::keywords::spelling(self).is_some()
    }

    /// Kind equality ignoring literal payloads.
    ///
    /// Two integer constants are the same kind regardless of value; an
    /// integer and a floating constant are not.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Human-readable name for diagnostics.
    ///
    /// Punctuators and keywords render as their canonical spelling;
    /// classes render as a description.
    pub fn display_name(&self) -> &'static str {
        if let Some(spelling) = crate::keywords::spelling(self) {
            return spelling;
        }
        match self {
            TokenKind::Invalid => "invalid token",
            TokenKind::Eof => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::LineComment => "// comment",
            TokenKind::BlockComment => "/* comment",
            TokenKind::IntConstant(_) => "integer constant",
            TokenKind::FloatConstant(_) => "floating constant",
            TokenKind::CharConstant(_) => "character constant",
            TokenKind::StrConstant(_) => "string constant",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::EqEq => "==",
            TokenKind::BangEq => "!=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Arrow => "->",
            TokenKind::Eq => "=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::ShlEq => "<<=",
            TokenKind::ShrEq => ">>=",
            TokenKind::AmpEq => "&=",
            TokenKind::PipeEq => "|=",
            TokenKind::CaretEq => "^=",
            TokenKind::Hash => "#",
            TokenKind::HashHash => "##",
            // Keywords were handled by `spelling` above.
            _ => "keyword",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Base;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_kind_ignores_payload() {
        let one = TokenKind::IntConstant(IntValue::parse("1", Base::Decimal));
        let two = TokenKind::IntConstant(IntValue::parse("2", Base::Decimal));
        assert!(one.same_kind(&two));
        assert!(!one.same_kind(&TokenKind::FloatConstant(FloatValue::new(1.0))));
        assert!(TokenKind::Semicolon.same_kind(&TokenKind::Semicolon));
    }

    #[test]
    fn classification() {
        assert!(TokenKind::LineComment.is_comment());
        assert!(TokenKind::BlockComment.is_comment());
        assert!(!TokenKind::Slash.is_comment());
        assert!(TokenKind::StrConstant(String::new()).is_constant());
        assert!(TokenKind::While.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
    }

    #[test]
    fn display_names() {
        assert_eq!(TokenKind::Semicolon.display_name(), ";");
        assert_eq!(TokenKind::Ellipsis.display_name(), "...");
        assert_eq!(TokenKind::While.display_name(), "while");
        assert_eq!(TokenKind::StaticAssert.display_name(), "_Static_assert");
        assert_eq!(TokenKind::Ident.display_name(), "identifier");
        assert_eq!(
            TokenKind::IntConstant(IntValue::parse("0", Base::Decimal)).display_name(),
            "integer constant"
        );
    }
}
