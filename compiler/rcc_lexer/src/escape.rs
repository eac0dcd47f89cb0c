//! Fixed single-character escape table.

/// Resolve a single-character escape to its value.
///
/// Recognized: `\n \t \r \\ \' \" \? \a \b \f \v`. Returns `None` for
/// anything else; the caller decides between the numeric escape forms
/// and the unrecognized-escape warning path.
#[inline]
pub(crate) fn simple_escape(b: u8) -> Option<char> {
    match b {
        b'n' => Some('\n'),
        b't' => Some('\t'),
        b'r' => Some('\r'),
        b'\\' => Some('\\'),
        b'\'' => Some('\''),
        b'"' => Some('"'),
        b'?' => Some('?'),
        b'a' => Some('\x07'),
        b'b' => Some('\x08'),
        b'f' => Some('\x0C'),
        b'v' => Some('\x0B'),
        _ => None,
    }
}
