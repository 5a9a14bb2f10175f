//! Control word classification.
//!
//! A control word head such as `f0`, `red255` or `fs-2` is split into its
//! literal name and an optional signed integer parameter, and the name is
//! looked up in a static table. Names missing from the table classify as
//! [`ControlWordKind::Unknown`]; that is never an error.

use crate::chars::is_digit;
use crate::error::{RtfError, RtfResult};
use crate::types::{CharacterSet, FontFamily};
use phf::phf_map;

/// Semantic category of a control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlWordKind {
    #[default]
    Unknown,

    // Prolog
    Rtf,
    CharacterSet(CharacterSet),
    AnsiCodePage,

    // Font table
    FontTable,
    FontNumber,
    FontSize,
    FontFamily(FontFamily),
    FontCharset,
    FontPitch,
    FontAlternative,

    // Color table
    ColorTable,
    ColorRed,
    ColorGreen,
    ColorBlue,

    // Stylesheet
    Stylesheet,
    StyleParagraph,
    StyleCharacter,
    StyleSection,
    StyleBasedOn,
    StyleNext,
    StyleAdditive,
    StyleHidden,

    // Information group
    Info,
    InfoTitle,
    InfoSubject,
    InfoAuthor,
    InfoManager,
    InfoCompany,
    InfoOperator,
    InfoCategory,
    InfoKeywords,
    InfoComment,
    InfoDocComment,
    InfoHlinkBase,
    InfoVersion,
    InfoInternalVersion,
    InfoEditingMinutes,
    InfoPages,
    InfoWords,
    InfoCharacters,
    InfoCreationTime,
    InfoRevisionTime,
    InfoPrintTime,
    InfoBackupTime,
    TimeYear,
    TimeMonth,
    TimeDay,
    TimeHour,
    TimeMinute,
    TimeSecond,

    // Character formatting
    Bold,
    Italic,
    Underline,
    UnderlineNone,
    Superscript,
    Subscript,
    SmallCaps,
    Strikethrough,
    Plain,

    // Paragraph and special characters
    Paragraph,
    ParagraphDefault,
    LineBreak,
    Tab,
}

impl ControlWordKind {
    /// Destinations that open one of the header tables.
    #[inline]
    pub fn is_header_table(self) -> bool {
        matches!(
            self,
            ControlWordKind::FontTable | ControlWordKind::ColorTable | ControlWordKind::Stylesheet
        )
    }
}

static CONTROL_WORDS: phf::Map<&'static str, ControlWordKind> = phf_map! {
    "rtf" => ControlWordKind::Rtf,
    "ansi" => ControlWordKind::CharacterSet(CharacterSet::Ansi),
    "mac" => ControlWordKind::CharacterSet(CharacterSet::Mac),
    "pc" => ControlWordKind::CharacterSet(CharacterSet::Pc),
    "pca" => ControlWordKind::CharacterSet(CharacterSet::Pca),
    "ansicpg" => ControlWordKind::AnsiCodePage,

    "fonttbl" => ControlWordKind::FontTable,
    "f" => ControlWordKind::FontNumber,
    "fs" => ControlWordKind::FontSize,
    "fnil" => ControlWordKind::FontFamily(FontFamily::Nil),
    "froman" => ControlWordKind::FontFamily(FontFamily::Roman),
    "fswiss" => ControlWordKind::FontFamily(FontFamily::Swiss),
    "fmodern" => ControlWordKind::FontFamily(FontFamily::Modern),
    "fscript" => ControlWordKind::FontFamily(FontFamily::Script),
    "fdecor" => ControlWordKind::FontFamily(FontFamily::Decor),
    "ftech" => ControlWordKind::FontFamily(FontFamily::Tech),
    "fbidi" => ControlWordKind::FontFamily(FontFamily::Bidi),
    "fcharset" => ControlWordKind::FontCharset,
    "fprq" => ControlWordKind::FontPitch,
    "falt" => ControlWordKind::FontAlternative,

    "colortbl" => ControlWordKind::ColorTable,
    "red" => ControlWordKind::ColorRed,
    "green" => ControlWordKind::ColorGreen,
    "blue" => ControlWordKind::ColorBlue,

    "stylesheet" => ControlWordKind::Stylesheet,
    "s" => ControlWordKind::StyleParagraph,
    "cs" => ControlWordKind::StyleCharacter,
    "ds" => ControlWordKind::StyleSection,
    "sbasedon" => ControlWordKind::StyleBasedOn,
    "snext" => ControlWordKind::StyleNext,
    "additive" => ControlWordKind::StyleAdditive,
    "shidden" => ControlWordKind::StyleHidden,

    "info" => ControlWordKind::Info,
    "title" => ControlWordKind::InfoTitle,
    "subject" => ControlWordKind::InfoSubject,
    "author" => ControlWordKind::InfoAuthor,
    "manager" => ControlWordKind::InfoManager,
    "company" => ControlWordKind::InfoCompany,
    "operator" => ControlWordKind::InfoOperator,
    "category" => ControlWordKind::InfoCategory,
    "keywords" => ControlWordKind::InfoKeywords,
    "comment" => ControlWordKind::InfoComment,
    "doccomm" => ControlWordKind::InfoDocComment,
    "doccom" => ControlWordKind::InfoDocComment,
    "hlinkbase" => ControlWordKind::InfoHlinkBase,
    "version" => ControlWordKind::InfoVersion,
    "vern" => ControlWordKind::InfoInternalVersion,
    "edmins" => ControlWordKind::InfoEditingMinutes,
    "nofpages" => ControlWordKind::InfoPages,
    "nofwords" => ControlWordKind::InfoWords,
    "nofchars" => ControlWordKind::InfoCharacters,
    "creatim" => ControlWordKind::InfoCreationTime,
    "revtim" => ControlWordKind::InfoRevisionTime,
    "printim" => ControlWordKind::InfoPrintTime,
    "buptim" => ControlWordKind::InfoBackupTime,
    "yr" => ControlWordKind::TimeYear,
    "mo" => ControlWordKind::TimeMonth,
    "dy" => ControlWordKind::TimeDay,
    "hr" => ControlWordKind::TimeHour,
    "min" => ControlWordKind::TimeMinute,
    "sec" => ControlWordKind::TimeSecond,

    "b" => ControlWordKind::Bold,
    "i" => ControlWordKind::Italic,
    "ul" => ControlWordKind::Underline,
    "ulnone" => ControlWordKind::UnderlineNone,
    "super" => ControlWordKind::Superscript,
    "sub" => ControlWordKind::Subscript,
    "scaps" => ControlWordKind::SmallCaps,
    "strike" => ControlWordKind::Strikethrough,
    "plain" => ControlWordKind::Plain,

    "par" => ControlWordKind::Paragraph,
    "pard" => ControlWordKind::ParagraphDefault,
    "line" => ControlWordKind::LineBreak,
    "tab" => ControlWordKind::Tab,
};

/// Look up the category of a control word name (without the backslash).
#[inline]
pub fn classify(name: &str) -> ControlWordKind {
    CONTROL_WORDS.get(name).copied().unwrap_or_default()
}

/// Control word with optional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlWord<'a> {
    /// Literal name, without the leading backslash
    pub name: &'a str,
    /// Semantic category
    pub kind: ControlWordKind,
    /// Trailing signed integer, absent when the word has none
    pub parameter: Option<i32>,
}

impl<'a> ControlWord<'a> {
    /// Parse a control word head (the text after the backslash, with any
    /// trailing `;` already removed).
    ///
    /// The parameter starts at the first digit or minus sign. A suffix that
    /// is not a valid `i32` yields [`RtfError::MalformedControlWord`].
    pub fn parse(head: &'a str) -> RtfResult<Self> {
        let split = head.bytes().position(|b| is_digit(b) || b == b'-');

        let (name, parameter) = match split {
            None => (head, None),
            Some(index) => {
                let (name, suffix) = head.split_at(index);
                let value = suffix
                    .parse::<i32>()
                    .map_err(|e| RtfError::MalformedControlWord(format!("\\{head}: {e}")))?;
                (name, Some(value))
            },
        };

        Ok(Self {
            name,
            kind: classify(name),
            parameter,
        })
    }

    /// Toggle value of a formatting word: on unless the parameter is zero.
    #[inline]
    pub fn toggle(&self) -> bool {
        self.parameter.is_none_or(|p| p != 0)
    }
}
