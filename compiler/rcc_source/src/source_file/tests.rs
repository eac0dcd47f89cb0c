use crate::{SourceError, SourceFile};
use pretty_assertions::assert_eq;

fn file(src: &str) -> SourceFile {
    match SourceFile::new("test.c", src) {
        Ok(f) => f,
        Err(e) => panic!("source construction failed: {e}"),
    }
}

#[test]
fn sentinel_follows_content() {
    let f = file("int x;");
    assert_eq!(f.len(), 6);
    assert_eq!(f.as_bytes(), b"int x;");
    assert_eq!(f.text(), "int x;");
    // One past the content is the sentinel.
    let c = f.cursor();
    assert_eq!(c.source_len(), 6);
}

#[test]
fn empty_source() {
    let f = file("");
    assert!(f.is_empty());
    assert_eq!(f.len(), 0);
    assert!(f.cursor().is_eof());
}

#[test]
fn name_is_shared() {
    let f = file("x");
    assert_eq!(f.name(), "test.c");
    let shared = f.shared_name();
    assert_eq!(&*shared, "test.c");
}

#[test]
fn cursor_reads_past_end_safely() {
    // peek/peek2 at the very end must land in sentinel/padding, not panic.
    let f = file("a");
    let c = f.cursor();
    assert_eq!(c.current(), b'a');
    assert_eq!(c.peek(), 0);
    assert_eq!(c.peek2(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let f = file("a\0b");
    let mut c = f.cursor();
    c.advance();
    assert_eq!(c.current(), 0);
    assert!(!c.is_eof());
    c.advance();
    c.advance();
    assert!(c.is_eof());
}

#[test]
fn too_large_display() {
    let err = SourceError::TooLarge(5_000_000_000);
    assert!(err.to_string().contains("5000000000"));
}
