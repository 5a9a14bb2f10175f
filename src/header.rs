//! Header table parsers: font table, color table and stylesheet.
//!
//! Each parser receives the tokens of one header group after its opening
//! brace, up to and including the matching `GroupEnd`. Nested entry groups
//! (`{\f0 ...}`) are walked flat; their braces only mark where an entry ends.

use crate::control::ControlWordKind;
use crate::lexer::Token;
use crate::types::{
    CharacterSet, Color, ColorRef, ColorTable, Font, FontRef, FontTable, Style, StyleKind,
    StyleSheet,
};

/// Strip exactly one trailing `;` field terminator.
#[inline]
fn strip_terminator(text: &str) -> &str {
    text.strip_suffix(';').unwrap_or(text)
}

/// Parse a font table.
///
/// A font number commits the font in progress under the previous key; a
/// closing brace commits it under the current key.
pub fn parse_font_table(tokens: &[Token<'_>]) -> FontTable {
    let mut table = FontTable::new();
    let mut key: FontRef = 0;
    let mut font = Font::default();
    let mut dirty = false;

    for token in tokens {
        match token {
            Token::ControlWord(word) => match word.kind {
                ControlWordKind::FontNumber => {
                    if dirty {
                        table.insert(key, std::mem::take(&mut font));
                    }
                    font = Font::default();
                    match word.parameter.and_then(|p| FontRef::try_from(p).ok()) {
                        Some(number) => key = number,
                        None => log::debug!("font number {:?} out of range", word.parameter),
                    }
                    dirty = true;
                },
                ControlWordKind::FontFamily(family) => {
                    font.family = family;
                    dirty = true;
                },
                ControlWordKind::FontCharset => {
                    font.character_set = word.parameter.and_then(CharacterSet::from_fcharset);
                    dirty = true;
                },
                _ => {},
            },
            Token::Text(text) => {
                font.name = strip_terminator(text).to_string();
                dirty = true;
            },
            Token::GroupEnd => {
                if dirty {
                    table.insert(key, std::mem::take(&mut font));
                    dirty = false;
                }
            },
            _ => {},
        }
    }

    table
}

/// Parse a color table.
///
/// Every red/green/blue triplet becomes one entry, keyed sequentially from 1.
pub fn parse_color_table(tokens: &[Token<'_>]) -> ColorTable {
    const UNSET: i32 = -1;

    let mut table = ColorTable::new();
    let mut next_key: ColorRef = 1;
    let mut channels = [UNSET; 3];

    for token in tokens {
        let Token::ControlWord(word) = token else {
            continue;
        };
        let channel = match word.kind {
            ControlWordKind::ColorRed => 0,
            ControlWordKind::ColorGreen => 1,
            ControlWordKind::ColorBlue => 2,
            _ => continue,
        };
        let value = word.parameter.unwrap_or(0);
        if value > i32::from(u8::MAX) {
            log::debug!("\\{}{} out of range, clamping to 255", word.name, value);
        } else if value < 0 {
            log::debug!("\\{}{} is negative, color left incomplete", word.name, value);
        }
        channels[channel] = value;

        if channels.iter().all(|&c| c >= 0) {
            let [red, green, blue] = channels.map(|c| c.min(i32::from(u8::MAX)) as u8);
            table.insert(next_key, Color::new(red, green, blue));
            next_key = next_key.saturating_add(1);
            channels = [UNSET; 3];
        }
    }

    table
}

/// Parse a stylesheet.
///
/// An entry is committed when its name is terminated by `;` or when its group
/// closes with a name set.
pub fn parse_stylesheet(tokens: &[Token<'_>]) -> StyleSheet {
    let mut sheet = StyleSheet::new();
    let mut style = Style::default();

    for token in tokens {
        match token {
            Token::ControlWord(word) => {
                let number = word.parameter.unwrap_or(0);
                match word.kind {
                    ControlWordKind::StyleParagraph => {
                        style.number = number;
                        style.kind = StyleKind::Paragraph;
                    },
                    ControlWordKind::StyleCharacter => {
                        style.number = number;
                        style.kind = StyleKind::Character;
                    },
                    ControlWordKind::StyleSection => {
                        style.number = number;
                        style.kind = StyleKind::Section;
                    },
                    ControlWordKind::StyleBasedOn => style.based_on = Some(number),
                    ControlWordKind::StyleNext => style.next = Some(number),
                    _ => {},
                }
            },
            Token::Text(text) => {
                style.name.push_str(strip_terminator(text));
                if text.ends_with(';') {
                    sheet.add(std::mem::take(&mut style));
                }
            },
            Token::GroupEnd => {
                if style.name.is_empty() {
                    style = Style::default();
                } else {
                    sheet.add(std::mem::take(&mut style));
                }
            },
            _ => {},
        }
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::types::FontFamily;

    /// Tokens after the opening brace of the first group.
    fn group_tokens(source: &str) -> Vec<Token<'_>> {
        tokenize(source).into_iter().skip(1).collect()
    }

    #[test]
    fn test_font_name_terminator_stripped() {
        let table = parse_font_table(&group_tokens(r"{\fonttbl\f0\fswiss Helvetica;}"));

        assert_eq!(table.len(), 1);
        let font = &table[&0];
        assert_eq!(font.name, "Helvetica");
        assert_eq!(font.family, FontFamily::Swiss);
        assert_eq!(font.character_set, None);
    }

    #[test]
    fn test_font_entries_in_groups() {
        let table = parse_font_table(&group_tokens(
            r"{\fonttbl{\f0\froman\fcharset0 Times New Roman;}{\f2\fmodern\fcharset77 Courier;}}",
        ));

        assert_eq!(table.len(), 2);
        assert_eq!(table[&0].name, "Times New Roman");
        assert_eq!(table[&0].family, FontFamily::Roman);
        assert_eq!(table[&0].character_set, Some(CharacterSet::Ansi));
        assert_eq!(table[&2].name, "Courier");
        assert_eq!(table[&2].character_set, Some(CharacterSet::Mac));
        assert!(!table.contains_key(&1));
    }

    #[test]
    fn test_flat_font_entries() {
        let table = parse_font_table(&group_tokens(
            r"{\fonttbl\f0\fswiss Helvetica;\f1\fnil Menlo;}",
        ));

        assert_eq!(table.len(), 2);
        assert_eq!(table[&0].name, "Helvetica");
        assert_eq!(table[&1].name, "Menlo");
        assert_eq!(table[&1].family, FontFamily::Nil);
    }

    #[test]
    fn test_only_one_terminator_stripped() {
        let table = parse_font_table(&group_tokens(r"{\fonttbl\f0 Odd;;}"));
        assert_eq!(table[&0].name, "Odd;");
    }

    #[test]
    fn test_color_table_sequencing() {
        let table = parse_color_table(&group_tokens(
            r"{\colortbl;\red0\green0\blue0;\red255\green255\blue255;}",
        ));

        assert_eq!(table.len(), 2);
        assert_eq!(table[&1], Color::new(0, 0, 0));
        assert_eq!(table[&2], Color::new(255, 255, 255));
        assert!(!table.contains_key(&0));
    }

    #[test]
    fn test_incomplete_color_not_committed() {
        let table = parse_color_table(&group_tokens(
            r"{\colortbl;\red10\green20\blue30;\red300\green5;}",
        ));

        assert_eq!(table.len(), 1);
        assert_eq!(table[&1], Color::new(10, 20, 30));
    }

    #[test]
    fn test_color_channel_range() {
        let table = parse_color_table(&group_tokens(
            r"{\colortbl;\red300\green0\blue0;\red1\green2\blue-3;\red7\green8\blue9;}",
        ));

        assert_eq!(table.len(), 2);
        assert_eq!(table[&1], Color::new(255, 0, 0));
        assert_eq!(table[&2], Color::new(7, 8, 9));
    }

    #[test]
    fn test_stylesheet_entries() {
        let sheet = parse_stylesheet(&group_tokens(
            r"{\stylesheet{\s0\snext0 Normal;}{\s1\sbasedon0\snext0 heading 1;}{\cs10 Default Paragraph Font;}}",
        ));

        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.get(0).map(|s| s.name.as_str()), Some("Normal"));

        let heading = sheet.get_by_name("heading 1").unwrap();
        assert_eq!(heading.number, 1);
        assert_eq!(heading.based_on, Some(0));
        assert_eq!(heading.next, Some(0));

        let character = sheet.get_by_name("Default Paragraph Font").unwrap();
        assert_eq!(character.kind, StyleKind::Character);
        assert_eq!(character.number, 10);
    }

    #[test]
    fn test_stylesheet_unterminated_name() {
        let sheet = parse_stylesheet(&group_tokens(r"{\stylesheet{\s2 Quote}}"));
        assert_eq!(sheet.styles().len(), 1);
        assert_eq!(sheet.styles()[0].name, "Quote");
        assert_eq!(sheet.styles()[0].number, 2);
    }
}
