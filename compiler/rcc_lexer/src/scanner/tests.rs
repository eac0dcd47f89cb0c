use crate::Scanner;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rcc_diagnostic::{DiagnosticKind, ErrorKind, Reporter};
use rcc_source::SourceFile;
use rcc_token::{keyword_lookup, TokenKind};

fn source(src: &str) -> SourceFile {
    match SourceFile::new("test.c", src) {
        Ok(f) => f,
        Err(e) => panic!("source construction failed: {e}"),
    }
}

/// Scan the first token, asserting no diagnostics were reported.
fn first(src: &str) -> (TokenKind, String) {
    let file = source(src);
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let tok = scanner.scan();
    assert_eq!(reporter.error_count(), 0, "unexpected errors for {src:?}");
    assert_eq!(reporter.warning_count(), 0, "unexpected warnings for {src:?}");
    (tok.kind.clone(), tok.text.to_string())
}

/// Scan every token through EOF, returning kinds and the diagnostic counts.
fn kinds(src: &str) -> (Vec<TokenKind>, usize, usize) {
    let file = source(src);
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let mut out = Vec::new();
    loop {
        let tok = scanner.scan();
        let eof = tok.is_eof();
        out.push(tok.kind.clone());
        if eof {
            break;
        }
    }
    (out, reporter.error_count(), reporter.warning_count())
}

#[test]
fn punctuators_scan_to_their_kinds() {
    let table: &[(&str, TokenKind)] = &[
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        (".", TokenKind::Dot),
        ("...", TokenKind::Ellipsis),
        (";", TokenKind::Semicolon),
        (",", TokenKind::Comma),
        ("<", TokenKind::Lt),
        ("<=", TokenKind::LtEq),
        ("<<", TokenKind::Shl),
        ("<<=", TokenKind::ShlEq),
        (">", TokenKind::Gt),
        (">=", TokenKind::GtEq),
        (">>", TokenKind::Shr),
        (">>=", TokenKind::ShrEq),
        ("=", TokenKind::Eq),
        ("==", TokenKind::EqEq),
        ("!", TokenKind::Bang),
        ("!=", TokenKind::BangEq),
        ("+", TokenKind::Plus),
        ("++", TokenKind::PlusPlus),
        ("+=", TokenKind::PlusEq),
        ("-", TokenKind::Minus),
        ("--", TokenKind::MinusMinus),
        ("-=", TokenKind::MinusEq),
        ("->", TokenKind::Arrow),
        ("*", TokenKind::Star),
        ("*=", TokenKind::StarEq),
        ("/", TokenKind::Slash),
        ("/=", TokenKind::SlashEq),
        ("%", TokenKind::Percent),
        ("%=", TokenKind::PercentEq),
        ("&", TokenKind::Amp),
        ("&&", TokenKind::AmpAmp),
        ("&=", TokenKind::AmpEq),
        ("|", TokenKind::Pipe),
        ("||", TokenKind::PipePipe),
        ("|=", TokenKind::PipeEq),
        ("^", TokenKind::Caret),
        ("^=", TokenKind::CaretEq),
        ("~", TokenKind::Tilde),
        ("?", TokenKind::Question),
        (":", TokenKind::Colon),
        ("#", TokenKind::Hash),
        ("##", TokenKind::HashHash),
    ];
    for (src, expected) in table {
        let (kind, text) = first(src);
        assert_eq!(&kind, expected, "for input {src:?}");
        assert_eq!(&text, src);
    }
}

#[test]
fn digraphs_scan_to_canonical_kinds() {
    // Each digraph yields the same kind as its canonical spelling, with
    // the digraph as spelled text.
    let table: &[(&str, TokenKind)] = &[
        ("<:", TokenKind::LBracket),
        (":>", TokenKind::RBracket),
        ("<%", TokenKind::LBrace),
        ("%>", TokenKind::RBrace),
        ("%:", TokenKind::Hash),
        ("%:%:", TokenKind::HashHash),
    ];
    for (src, expected) in table {
        let (kind, text) = first(src);
        assert_eq!(&kind, expected, "for input {src:?}");
        assert_eq!(&text, src);
    }
}

#[test]
fn keywords_resolve_from_the_static_table() {
    for src in [
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof",
        "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
        "_Thread_local",
    ] {
        let (kind, text) = first(src);
        let expected = match keyword_lookup(src) {
            Some(kind) => kind,
            None => panic!("{src:?} missing from keyword table"),
        };
        assert_eq!(kind, expected, "for input {src:?}");
        assert!(kind.is_keyword());
        assert_eq!(&text, src);
    }
}

#[test]
fn identifiers_stop_at_the_right_boundary() {
    let table: &[(&str, &str)] = &[
        ("x", "x"),
        ("_a0", "_a0"),
        ("z1", "z1"),
        ("_\n", "_"),
        ("a b", "a"),
        ("a_", "a_"),
        ("p29^3", "p29"),
        ("aaa+1", "aaa"),
        ("__111", "__111"),
        ("あああ", "あああ"),
        ("naïve", "naïve"),
    ];
    for (src, expected) in table {
        let (kind, text) = first(src);
        assert_eq!(kind, TokenKind::Ident, "for input {src:?}");
        assert_eq!(&text, expected);
    }
}

#[test]
fn keyword_and_identifier_are_disjoint() {
    // A keyword spelling never scans as Ident; a near-miss never scans as
    // a keyword.
    let (kind, _) = first("while");
    assert!(kind.is_keyword());
    let (kind, _) = first("while_");
    assert_eq!(kind, TokenKind::Ident);
    let (kind, _) = first("While");
    assert_eq!(kind, TokenKind::Ident);
}

#[test]
fn eof_is_repeatable_with_empty_text() {
    let file = source("  \n\t ");
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let a = scanner.scan();
    assert!(a.is_eof());
    assert_eq!(a.text, "");
    let b = scanner.scan();
    assert!(b.is_eof());
    assert_eq!(b.start, a.start);
    assert_eq!(b.end, a.end);
    assert_eq!(reporter.error_count(), 0);
}

#[test]
fn empty_source_is_eof() {
    let (kind, text) = first("");
    assert_eq!(kind, TokenKind::Eof);
    assert_eq!(text, "");
}

#[test]
fn statement_tokenizes_cleanly() {
    let (seq, errors, warnings) = kinds("a+b;");
    assert_eq!(
        seq,
        vec![
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!((errors, warnings), (0, 0));
}

#[test]
fn unknown_character_is_an_error_token() {
    let file = source("@");
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let tok = scanner.scan();
    assert_eq!(tok.kind, TokenKind::Invalid);
    assert_eq!(tok.text, "@");
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(
        reporter.errors()[0].kind,
        DiagnosticKind::Error(ErrorKind::UnknownCharacter)
    );
    // Scanning continues past it.
    assert!(scanner.scan().is_eof());
}

#[test]
fn interior_null_is_an_unknown_character() {
    let (seq, errors, _) = kinds("a\0b");
    assert_eq!(
        seq,
        vec![
            TokenKind::Ident,
            TokenKind::Invalid,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
    assert_eq!(errors, 1);
}

#[test]
fn non_letter_code_point_is_unknown() {
    let file = source("€");
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let tok = scanner.scan();
    assert_eq!(tok.kind, TokenKind::Invalid);
    assert_eq!(tok.text, "€");
    assert_eq!(reporter.error_count(), 1);
}

#[test]
fn line_comment_excludes_the_newline() {
    let file = source("// aaa bbb\nx");
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let comment = scanner.scan();
    assert_eq!(comment.kind, TokenKind::LineComment);
    assert_eq!(comment.text, "// aaa bbb");
    let next = scanner.scan();
    assert_eq!(next.kind, TokenKind::Ident);
    assert_eq!(next.start.line, 2);
    assert_eq!(next.start.column, 0);
}

#[test]
fn line_comment_at_eof() {
    let (kind, text) = first("// aaa bbb");
    assert_eq!(kind, TokenKind::LineComment);
    assert_eq!(text, "// aaa bbb");
}

#[test]
fn line_comment_stops_at_carriage_return() {
    let file = source("// aaabbb \r\n");
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let comment = scanner.scan();
    assert_eq!(comment.kind, TokenKind::LineComment);
    assert_eq!(comment.text, "// aaabbb ");
    assert!(scanner.scan().is_eof());
}

#[test]
fn block_comments_span_newlines() {
    for src in [
        "/***********/",
        "/* aaa bbb */",
        "/* aaa\nbbb */",
        "/* aaabbb \r */",
        "/** \r\n ** \n **/",
    ] {
        let (kind, text) = first(src);
        assert_eq!(kind, TokenKind::BlockComment, "for input {src:?}");
        assert_eq!(&text, src);
    }
}

#[test]
fn block_comment_counts_lines() {
    let file = source("/** \r\n ** \n **/");
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let tok = scanner.scan();
    assert_eq!(tok.kind, TokenKind::BlockComment);
    assert_eq!(tok.end.line, 3);
}

#[test]
fn unterminated_block_comment() {
    let src = "/* unterminated";
    let file = source(src);
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    let tok = scanner.scan();
    assert_eq!(tok.kind, TokenKind::Invalid);
    assert_eq!(tok.text, src);
    assert_eq!(tok.end.offset as usize, src.len());
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(
        reporter.errors()[0].kind,
        DiagnosticKind::Error(ErrorKind::UnterminatedBlockComment)
    );
    assert!(scanner.scan().is_eof());
}

#[test]
fn locations_track_lines_and_columns() {
    let file = source("ab\n  cd");
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);

    let ab = scanner.scan();
    assert_eq!((ab.start.line, ab.start.column, ab.start.offset), (1, 0, 0));
    assert_eq!((ab.end.line, ab.end.column, ab.end.offset), (1, 2, 2));

    let cd = scanner.scan();
    assert_eq!((cd.start.line, cd.start.column, cd.start.offset), (2, 2, 5));
    assert_eq!((cd.end.line, cd.end.column, cd.end.offset), (2, 4, 7));
}

#[test]
fn crlf_is_one_logical_newline() {
    let file = source("a\r\nb\rc");
    let reporter = Reporter::new();
    let mut scanner = Scanner::new(&file, &reporter);
    scanner.scan(); // a
    let b = scanner.scan();
    assert_eq!(b.start.line, 2);
    let c = scanner.scan();
    // A lone \r also counts as a newline.
    assert_eq!(c.start.line, 3);
    assert_eq!(c.start.column, 0);
}

proptest! {
    /// `scan()` is total: never panics, always terminates, and every
    /// token's spelled text equals the source slice between its offsets.
    #[test]
    fn scan_is_total_and_spans_match(src in any::<String>()) {
        let file = source(&src);
        let reporter = Reporter::new();
        let mut scanner = Scanner::new(&file, &reporter);
        let mut scanned = 0usize;
        loop {
            let tok = scanner.scan();
            let start = tok.start.offset as usize;
            let end = tok.end.offset as usize;
            prop_assert_eq!(&src[start..end], tok.text);
            if tok.is_eof() {
                break;
            }
            scanned += 1;
            // Every non-EOF token consumes at least one byte.
            prop_assert!(scanned <= src.len(), "scanner failed to make progress");
        }
    }
}
