//! Byte scanning helpers
//!
//! Whitespace stripping and delimiter/comment search over raw line bytes.
//! All helpers return sub-slices or indices into their input and never
//! allocate.

/// Whitespace as understood by C `isspace` in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab (0x0B).
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Whether `byte` can open an inline comment
#[inline]
pub fn is_comment_marker(byte: u8) -> bool {
    byte == b';' || byte == b'#'
}

/// Strip trailing whitespace
pub fn rstrip(s: &[u8]) -> &[u8] {
    let end = s.iter().rposition(|&b| !is_space(b)).map_or(0, |i| i + 1);
    &s[..end]
}

/// Number of leading whitespace bytes
pub fn leading_space(s: &[u8]) -> usize {
    s.iter().take_while(|&&b| is_space(b)).count()
}

/// Skip leading whitespace
pub fn lskip(s: &[u8]) -> &[u8] {
    &s[leading_space(s)..]
}

/// Index of the first `c` or inline comment marker in `s`, or `s.len()`.
///
/// A `;` or `#` only counts as a comment when the byte before it is
/// whitespace, so `path=C:#1` keeps its `#`.
pub fn find_char_or_comment(s: &[u8], c: u8) -> usize {
    scan(s, |b| b == c)
}

/// Index of the first inline comment marker in `s`, or `s.len()`.
pub fn find_comment(s: &[u8]) -> usize {
    scan(s, |_| false)
}

/// Index of the last `c` that occurs before any inline comment.
pub fn find_last_char_before_comment(s: &[u8], c: u8) -> Option<usize> {
    let mut last = None;
    let mut was_space = false;
    for (i, &b) in s.iter().enumerate() {
        if was_space && is_comment_marker(b) {
            break;
        }
        if b == c {
            last = Some(i);
        }
        was_space = is_space(b);
    }
    last
}

fn scan(s: &[u8], stop: impl Fn(u8) -> bool) -> usize {
    let mut was_space = false;
    for (i, &b) in s.iter().enumerate() {
        if stop(b) || (was_space && is_comment_marker(b)) {
            return i;
        }
        was_space = is_space(b);
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_space_matches_c_locale() {
        for b in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(is_space(b), "{:#04x}", b);
        }
        assert!(!is_space(b'a'));
        assert!(!is_space(0x00));
        assert!(!is_space(0xA0));
    }

    #[test]
    fn test_rstrip() {
        assert_eq!(rstrip(b"key = value \r\n"), b"key = value");
        assert_eq!(rstrip(b"   "), b"");
        assert_eq!(rstrip(b""), b"");
        assert_eq!(rstrip(b"  a"), b"  a");
    }

    #[test]
    fn test_lskip() {
        assert_eq!(lskip(b" \t value"), b"value");
        assert_eq!(lskip(b"\x0b\x0cv "), b"v ");
        assert_eq!(lskip(b"  "), b"");
        assert_eq!(leading_space(b"  x"), 2);
    }

    #[test]
    fn test_find_char_or_comment() {
        assert_eq!(find_char_or_comment(b"key=value", b'='), 3);
        assert_eq!(find_char_or_comment(b"key ; = value", b'='), 4);
        assert_eq!(find_char_or_comment(b"a;b=c", b'='), 3);
        assert_eq!(find_char_or_comment(b"abc", b'='), 3);
    }

    #[test]
    fn test_comment_requires_preceding_whitespace() {
        assert_eq!(find_comment(b"C:#1"), 4);
        assert_eq!(find_comment(b"C: #1"), 3);
        assert_eq!(find_comment(b"#first"), 6);
        assert_eq!(find_comment(b"x\t;y"), 2);
    }

    #[test]
    fn test_find_last_char_before_comment() {
        assert_eq!(find_last_char_before_comment(b"a]b]", b']'), Some(3));
        assert_eq!(find_last_char_before_comment(b"a] ; x]", b']'), Some(1));
        assert_eq!(find_last_char_before_comment(b"abc", b']'), None);
        assert_eq!(find_last_char_before_comment(b"]", b']'), Some(0));
        assert_eq!(find_last_char_before_comment(b"a #]", b']'), None);
    }
}
