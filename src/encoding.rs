//! Codepage handling for hex escapes and non-UTF-8 input.
//!
//! RTF text is 7-bit; bytes above 0x7F arrive as `\'hh` escapes interpreted in
//! the document character set, or as raw bytes in files written by older
//! producers. Both are decoded with `encoding_rs`.

use crate::types::CharacterSet;
use encoding_rs::Encoding;
use std::borrow::Cow;

/// Map a Windows codepage identifier (`\ansicpgN`) to an encoding.
///
/// DOS codepages 437 and 850 have no `encoding_rs` decoder and map to the
/// closest available one.
#[inline]
pub fn codepage_to_encoding(codepage: i32) -> Option<&'static Encoding> {
    match codepage {
        // DOS codepages
        437 | 850 => Some(encoding_rs::IBM866),

        // Windows codepages
        874 => Some(encoding_rs::WINDOWS_874),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),

        // East Asian codepages
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),

        // Mac
        10000 => Some(encoding_rs::MACINTOSH),
        10007 => Some(encoding_rs::X_MAC_CYRILLIC),

        65001 => Some(encoding_rs::UTF_8),
        _ => None,
    }
}

/// Default encoding for a document character set.
#[inline]
pub fn charset_encoding(charset: CharacterSet) -> &'static Encoding {
    match charset {
        CharacterSet::Ansi => encoding_rs::WINDOWS_1252,
        CharacterSet::Mac => encoding_rs::MACINTOSH,
        // No CP437/CP850 decoder; IBM866 shares the box-drawing range.
        CharacterSet::Pc | CharacterSet::Pca => encoding_rs::IBM866,
    }
}

/// Decode a whole input buffer: UTF-8 when valid, Windows-1252 otherwise.
pub fn decode_input(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            log::debug!("input is not UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepage_lookup() {
        assert_eq!(codepage_to_encoding(1252), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(codepage_to_encoding(1251), Some(encoding_rs::WINDOWS_1251));
        assert_eq!(codepage_to_encoding(12345), None);
    }

    #[test]
    fn test_charset_encoding() {
        assert_eq!(charset_encoding(CharacterSet::Ansi), encoding_rs::WINDOWS_1252);
        assert_eq!(charset_encoding(CharacterSet::Mac), encoding_rs::MACINTOSH);
        assert_eq!(charset_encoding(CharacterSet::Pca), encoding_rs::IBM866);
    }

    #[test]
    fn test_decode_input() {
        assert!(matches!(decode_input(b"{\\rtf1 ok}"), Cow::Borrowed(_)));
        assert_eq!(decode_input(b"caf\xe9"), "café");
    }
}
