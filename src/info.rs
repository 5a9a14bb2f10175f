//! RTF document information group (`{\info ...}`).
//!
//! Text fields are read from `{\field text}` groups of exactly one control
//! word and one text run; anything else in that position is ignored. Numeric
//! fields take the parameter of their control word, and timestamps collect
//! their `\yr \mo \dy \hr \min \sec` components.

use crate::control::{ControlWord, ControlWordKind};
use crate::lexer::Token;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Document information/metadata. Absent fields stay empty or zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InformationGroup {
    /// Document title
    pub title: String,
    /// Document subject
    pub subject: String,
    /// Document author
    pub author: String,
    /// Document manager
    pub manager: String,
    /// Company name
    pub company: String,
    /// Operator (last person to modify)
    pub operator: String,
    /// Document category
    pub category: String,
    /// Keywords
    pub keywords: String,
    /// Comments
    pub comment: String,
    /// Document comment (`\doccomm`)
    pub document_comment: String,
    /// Base address for relative hyperlinks
    pub hyperlink_base: String,
    /// Document version
    pub version: i32,
    /// Internal version number (`\vern`)
    pub internal_version: i32,
    /// Total editing time in minutes
    pub editing_minutes: i32,
    /// Number of pages
    pub pages: i32,
    /// Number of words
    pub words: i32,
    /// Number of characters
    pub characters: i32,
    /// Creation time
    pub creation_time: Option<NaiveDateTime>,
    /// Revision time (last modified)
    pub revision_time: Option<NaiveDateTime>,
    /// Print time (last printed)
    pub print_time: Option<NaiveDateTime>,
    /// Backup time
    pub backup_time: Option<NaiveDateTime>,
}

impl InformationGroup {
    /// Create an empty information group.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn text_field_mut(&mut self, kind: ControlWordKind) -> Option<&mut String> {
        let field = match kind {
            ControlWordKind::InfoTitle => &mut self.title,
            ControlWordKind::InfoSubject => &mut self.subject,
            ControlWordKind::InfoAuthor => &mut self.author,
            ControlWordKind::InfoManager => &mut self.manager,
            ControlWordKind::InfoCompany => &mut self.company,
            ControlWordKind::InfoOperator => &mut self.operator,
            ControlWordKind::InfoCategory => &mut self.category,
            ControlWordKind::InfoKeywords => &mut self.keywords,
            ControlWordKind::InfoComment => &mut self.comment,
            ControlWordKind::InfoDocComment => &mut self.document_comment,
            ControlWordKind::InfoHlinkBase => &mut self.hyperlink_base,
            _ => return None,
        };
        Some(field)
    }

    fn number_field_mut(&mut self, kind: ControlWordKind) -> Option<&mut i32> {
        let field = match kind {
            ControlWordKind::InfoVersion => &mut self.version,
            ControlWordKind::InfoInternalVersion => &mut self.internal_version,
            ControlWordKind::InfoEditingMinutes => &mut self.editing_minutes,
            ControlWordKind::InfoPages => &mut self.pages,
            ControlWordKind::InfoWords => &mut self.words,
            ControlWordKind::InfoCharacters => &mut self.characters,
            _ => return None,
        };
        Some(field)
    }

    fn time_field_mut(&mut self, kind: ControlWordKind) -> Option<&mut Option<NaiveDateTime>> {
        let field = match kind {
            ControlWordKind::InfoCreationTime => &mut self.creation_time,
            ControlWordKind::InfoRevisionTime => &mut self.revision_time,
            ControlWordKind::InfoPrintTime => &mut self.print_time,
            ControlWordKind::InfoBackupTime => &mut self.backup_time,
            _ => return None,
        };
        Some(field)
    }
}

/// Parse the contents of an info group.
///
/// `tokens` are the tokens after `\info`, up to and including the group's
/// closing `GroupEnd`.
pub fn parse_information_group(tokens: &[Token<'_>]) -> InformationGroup {
    let mut info = InformationGroup::new();
    let mut i = 0;

    while i < tokens.len() {
        if let [Token::GroupStart, Token::ControlWord(word), Token::Text(text), Token::GroupEnd, ..] =
            &tokens[i..]
            && let Some(field) = info.text_field_mut(word.kind)
        {
            *field = text.to_string();
            i += 4;
            continue;
        }

        if let [Token::GroupStart, Token::ControlWord(word), ..] = &tokens[i..]
            && let Some(field) = info.time_field_mut(word.kind)
        {
            let (timestamp, consumed) = parse_timestamp(&tokens[i + 2..]);
            *field = timestamp;
            i += 2 + consumed;
            continue;
        }

        if let Token::ControlWord(word) = &tokens[i]
            && let Some(field) = info.number_field_mut(word.kind)
        {
            match word.parameter {
                Some(value) => *field = value,
                None => log::debug!("\\{} without a value", word.name),
            }
        }

        i += 1;
    }

    info
}

/// Read `\yrN\moN\dyN\hrN\minN\secN` up to the closing `GroupEnd`.
///
/// Returns the timestamp, if the components form a valid date, and the number
/// of tokens consumed including the `GroupEnd`.
fn parse_timestamp(tokens: &[Token<'_>]) -> (Option<NaiveDateTime>, usize) {
    let (mut year, mut month, mut day) = (None, 1u32, 1u32);
    let (mut hour, mut minute, mut second) = (0u32, 0u32, 0u32);
    let mut consumed = 0;

    for token in tokens {
        consumed += 1;
        match token {
            Token::GroupEnd => break,
            Token::ControlWord(ControlWord {
                kind,
                parameter: Some(value),
                ..
            }) => {
                let unsigned = u32::try_from(*value).unwrap_or(0);
                match kind {
                    ControlWordKind::TimeYear => year = Some(*value),
                    ControlWordKind::TimeMonth => month = unsigned,
                    ControlWordKind::TimeDay => day = unsigned,
                    ControlWordKind::TimeHour => hour = unsigned,
                    ControlWordKind::TimeMinute => minute = unsigned,
                    ControlWordKind::TimeSecond => second = unsigned,
                    _ => {},
                }
            },
            _ => {},
        }
    }

    let timestamp = year
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .and_then(|date| date.and_hms_opt(hour, minute, second));
    (timestamp, consumed)
}
