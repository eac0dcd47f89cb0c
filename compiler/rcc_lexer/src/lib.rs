//! Hand-written lexical scanner for C source text.
//!
//! The [`Scanner`] turns one [`SourceFile`](rcc_source::SourceFile) into a
//! stream of classified [`Token`](rcc_token::Token)s, one per `scan()`
//! call. It is total: malformed input is recorded on the shared
//! [`Reporter`](rcc_diagnostic::Reporter) and still produces a token (an
//! invalid one spanning the whole offending lexeme), so scanning always
//! advances and always terminates.
//!
//! The scanner recognizes identifiers and keywords, the full punctuator
//! set including digraph spellings, both comment forms, and the three
//! constant families with their validation grammars: numeric constants
//! (octal/decimal/hex, floats with decimal or binary exponents, integer
//! and floating suffixes), and quoted character/string constants with
//! C escape-sequence decoding.

mod escape;
mod number;
mod quoted;
mod scanner;

pub use scanner::Scanner;
