//! Static keyword table.
//!
//! [`keyword_lookup`] resolves an identifier spelling to its keyword kind
//! using the identifier's length as a first-pass filter (keywords are 2–14
//! bytes), then matching against the keywords of that length. No hashing,
//! no allocation.

use crate::TokenKind;

/// Look up a keyword by its exact spelled text.
///
/// Returns the keyword kind if `text` is a keyword, `None` for a regular
/// identifier. Spellings whose length falls outside the 2–14 range are
/// rejected without any comparison.
#[inline]
pub fn keyword_lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-14 bytes and start with a letter or `_`.
    if !(2..=14).contains(&len) {
        return None;
    }
    let first = bytes[0];
    if !first.is_ascii_alphabetic() && first != b'_' {
        return None;
    }

    match len {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::Int),
            _ => None,
        },
        4 => match text {
            "auto" => Some(TokenKind::Auto),
            "case" => Some(TokenKind::Case),
            "char" => Some(TokenKind::Char),
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "goto" => Some(TokenKind::Goto),
            "long" => Some(TokenKind::Long),
            "void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "const" => Some(TokenKind::Const),
            "float" => Some(TokenKind::Float),
            "short" => Some(TokenKind::Short),
            "union" => Some(TokenKind::Union),
            "while" => Some(TokenKind::While),
            "_Bool" => Some(TokenKind::Bool),
            _ => None,
        },
        6 => match text {
            "double" => Some(TokenKind::Double),
            "extern" => Some(TokenKind::Extern),
            "inline" => Some(TokenKind::Inline),
            "return" => Some(TokenKind::Return),
            "signed" => Some(TokenKind::Signed),
            "sizeof" => Some(TokenKind::Sizeof),
            "static" => Some(TokenKind::Static),
            "struct" => Some(TokenKind::Struct),
            "switch" => Some(TokenKind::Switch),
            _ => None,
        },
        7 => match text {
            "default" => Some(TokenKind::Default),
            "typedef" => Some(TokenKind::Typedef),
            "_Atomic" => Some(TokenKind::Atomic),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            "register" => Some(TokenKind::Register),
            "restrict" => Some(TokenKind::Restrict),
            "unsigned" => Some(TokenKind::Unsigned),
            "volatile" => Some(TokenKind::Volatile),
            "_Alignas" => Some(TokenKind::Alignas),
            "_Alignof" => Some(TokenKind::Alignof),
            "_Complex" => Some(TokenKind::Complex),
            "_Generic" => Some(TokenKind::Generic),
            _ => None,
        },
        9 => match text {
            "_Noreturn" => Some(TokenKind::Noreturn),
            _ => None,
        },
        10 => match text {
            "_Imaginary" => Some(TokenKind::Imaginary),
            _ => None,
        },
        13 => match text {
            "_Thread_local" => Some(TokenKind::ThreadLocal),
            _ => None,
        },
        14 => match text {
            "_Static_assert" => Some(TokenKind::StaticAssert),
            _ => None,
        },
        _ => None,
    }
}

/// The canonical spelling of a keyword kind, `None` for non-keywords.
pub(crate) fn spelling(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Auto => Some("auto"),
        TokenKind::Break => Some("break"),
        TokenKind::Case => Some("case"),
        TokenKind::Char => Some("char"),
        TokenKind::Const => Some("const"),
        TokenKind::Continue => Some("continue"),
        TokenKind::Default => Some("default"),
        TokenKind::Do => Some("do"),
        TokenKind::Double => Some("double"),
        TokenKind::Else => Some("else"),
        TokenKind::Enum => Some("enum"),
        TokenKind::Extern => Some("extern"),
        TokenKind::Float => Some("float"),
        TokenKind::For => Some("for"),
        TokenKind::Goto => Some("goto"),
        TokenKind::If => Some("if"),
        TokenKind::Inline => Some("inline"),
        TokenKind::Int => Some("int"),
        TokenKind::Long => Some("long"),
        TokenKind::Register => Some("register"),
        TokenKind::Restrict => Some("restrict"),
        TokenKind::Return => Some("return"),
        TokenKind::Short => Some("short"),
        TokenKind::Signed => Some("signed"),
        TokenKind::Sizeof => Some("sizeof"),
        TokenKind::Static => Some("static"),
        TokenKind::Struct => Some("struct"),
        TokenKind::Switch => Some("switch"),
        TokenKind::Typedef => Some("typedef"),
        TokenKind::Union => Some("union"),
        TokenKind::Unsigned => Some("unsigned"),
        TokenKind::Void => Some("void"),
        TokenKind::Volatile => Some("volatile"),
        TokenKind::While => Some("while"),
        TokenKind::Alignas => Some("_Alignas"),
        TokenKind::Alignof => Some("_Alignof"),
        TokenKind::Atomic => Some("_Atomic"),
        TokenKind::Bool => Some("_Bool"),
        TokenKind::Complex => Some("_Complex"),
        TokenKind::Generic => Some("_Generic"),
        TokenKind::Imaginary => Some("_Imaginary"),
        TokenKind::Noreturn => Some("_Noreturn"),
        TokenKind::StaticAssert => Some("_Static_assert"),
        TokenKind::ThreadLocal => Some("_Thread_local"),
        _ => None,
    }
}
