//! Byte classification used by the tokenizer.
//!
//! All RTF syntax characters are ASCII, so the tokenizer works on bytes and
//! only slices the input at positions these predicates accept.

/// ASCII digit.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Lowercase ASCII letter; the only bytes that may start a control word.
#[inline]
pub const fn is_alpha_lower(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Space, tab, line feed, carriage return, vertical tab or form feed.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Bytes that end a literal or control word run.
#[inline]
pub const fn is_delimiter(b: u8) -> bool {
    matches!(b, b'\\' | b'{' | b'}')
}

/// Whether `text` is empty or made only of whitespace bytes.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.bytes().all(is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_and_letter_classes() {
        assert!(is_digit(b'0'));
        assert!(is_digit(b'9'));
        assert!(!is_digit(b'-'));
        assert!(is_alpha_lower(b'a'));
        assert!(!is_alpha_lower(b'A'));
        assert!(!is_alpha_lower(b'*'));
    }

    #[test]
    fn test_whitespace_and_blank() {
        for b in [b' ', b'\t', b'\n', b'\r', 0x0B, 0x0C] {
            assert!(is_whitespace(b));
        }
        assert!(!is_whitespace(b'x'));
        assert!(is_blank(""));
        assert!(is_blank(" \r\n\t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_delimiters() {
        assert!(is_delimiter(b'\\'));
        assert!(is_delimiter(b'{'));
        assert!(is_delimiter(b'}'));
        assert!(!is_delimiter(b';'));
    }
}
