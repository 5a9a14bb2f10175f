//! RTF parser that builds document structure from tokens.
//!
//! The token slice is never modified. Three passes run over it:
//!
//! 1. the header pass extracts the font table, color table and stylesheet,
//! 2. the information pass extracts `{\info ...}`,
//! 3. the body pass walks everything else with a stack of [`Painter`]s.
//!
//! Groups consumed by the first two passes are recorded as index ranges and
//! skipped by the body pass.

use crate::config::{ParseOptions, ScopeInheritance};
use crate::control::{ControlWord, ControlWordKind};
use crate::document::RtfDocument;
use crate::error::{RtfError, RtfResult};
use crate::header::{parse_color_table, parse_font_table, parse_stylesheet};
use crate::info::{InformationGroup, parse_information_group};
use crate::lexer::Token;
use crate::types::{FontRef, Header, Painter, StyleBlock};
use smallvec::{SmallVec, smallvec};
use std::ops::Range;

/// RTF Parser.
pub struct Parser<'t, 'a> {
    /// Token stream
    tokens: &'t [Token<'a>],
    /// Current position in token stream
    cursor: usize,
    /// Groups already handled by the header and information passes
    consumed: SmallVec<[Range<usize>; 4]>,
    /// Painter stack; the bottom entry is the root scope and is never popped
    painters: SmallVec<[Painter; 8]>,
    /// Parsed style blocks
    body: Vec<StyleBlock>,
    options: &'t ParseOptions,
}

impl<'t, 'a> Parser<'t, 'a> {
    /// Create a new parser.
    pub fn new(tokens: &'t [Token<'a>], options: &'t ParseOptions) -> Self {
        Self {
            tokens,
            cursor: 0,
            consumed: SmallVec::new(),
            painters: smallvec![Painter::default()],
            body: Vec::new(),
            options,
        }
    }

    /// Parse the token stream into a document.
    pub fn parse(mut self) -> RtfResult<RtfDocument> {
        let header = self.parse_header()?;
        let info = self.parse_information_group()?;
        self.parse_body()?;

        log::debug!(
            "parsed {} fonts, {} colors, {} styles, {} blocks",
            header.font_table.len(),
            header.color_table.len(),
            header.stylesheet.len(),
            self.body.len()
        );

        Ok(RtfDocument::from_parts(header, info, self.body))
    }

    /// Extract the header tables and the document character set.
    ///
    /// Stops at the first token that does not open a header table once at
    /// least one table has been read.
    fn parse_header(&mut self) -> RtfResult<Header> {
        let tokens = self.tokens;
        let mut header = Header::default();
        let mut charset_seen = false;
        let mut in_tables = false;
        self.cursor = 0;

        while self.cursor < tokens.len() {
            if let Some(kind) = self.header_table_at(self.cursor) {
                let span = self.group_span(self.cursor)?;
                let inner = &tokens[span.start + 1..span.end];
                match kind {
                    ControlWordKind::FontTable => header.font_table = parse_font_table(inner),
                    ControlWordKind::ColorTable => header.color_table = parse_color_table(inner),
                    ControlWordKind::Stylesheet => header.stylesheet = parse_stylesheet(inner),
                    _ => {},
                }
                log::trace!("header table {:?} spans tokens {:?}", kind, span);

                self.cursor = span.end;
                self.consumed.push(span);
                in_tables = true;
                continue;
            }

            if in_tables {
                break;
            }

            if !charset_seen
                && let Some(ControlWordKind::CharacterSet(charset)) =
                    tokens[self.cursor].control_kind()
            {
                header.character_set = charset;
                charset_seen = true;
            }
            self.cursor += 1;
        }

        Ok(header)
    }

    /// Extract the information group, if it is the first destination group
    /// after the prolog.
    fn parse_information_group(&mut self) -> RtfResult<InformationGroup> {
        let tokens = self.tokens;
        self.cursor = 0;

        while self.cursor < tokens.len() {
            if let Some(end) = self.consumed_end(self.cursor) {
                self.cursor = end;
                continue;
            }

            if let [Token::GroupStart, Token::ControlWord(word), ..] = &tokens[self.cursor..] {
                match word.kind {
                    ControlWordKind::Rtf => {},
                    ControlWordKind::Info => {
                        let span = self.group_span(self.cursor)?;
                        let info = parse_information_group(&tokens[span.start + 2..span.end]);
                        log::trace!("information group spans tokens {:?}", span);
                        self.consumed.push(span);
                        return Ok(info);
                    },
                    _ => break,
                }
            }
            self.cursor += 1;
        }

        Ok(InformationGroup::default())
    }

    /// Walk the body, emitting one style block per text run.
    fn parse_body(&mut self) -> RtfResult<()> {
        let tokens = self.tokens;
        let mut index = 0;
        let mut previous_was_text = false;

        while index < tokens.len() {
            if let Some(end) = self.consumed_end(index) {
                index = end;
                previous_was_text = false;
                continue;
            }

            match &tokens[index] {
                Token::GroupStart => {
                    let seed = match self.options.scope_inheritance {
                        ScopeInheritance::Reset => Painter::default(),
                        ScopeInheritance::Inherit => *self.current_painter()?,
                    };
                    self.painters.push(seed);
                },
                Token::GroupEnd => {
                    if self.painters.len() <= 1 {
                        return Err(RtfError::UnbalancedGroup(format!(
                            "group closed at token {index} was never opened"
                        )));
                    }
                    self.painters.pop();
                },
                Token::ControlWord(word) => self.apply_control_word(word)?,
                Token::Text(text) => {
                    let painter = *self.current_painter()?;
                    match self.body.last_mut() {
                        Some(block) if previous_was_text => block.text.push_str(text),
                        _ => self.body.push(StyleBlock::new(painter, text.to_string())),
                    }
                },
                Token::Crlf => self.push_break("\n")?,
                Token::IgnorableMarker => {},
            }

            previous_was_text = matches!(tokens[index], Token::Text(_));
            index += 1;
        }

        if self.painters.len() > 1 {
            return Err(RtfError::UnbalancedGroup(format!(
                "{} group(s) still open at end of input",
                self.painters.len() - 1
            )));
        }

        Ok(())
    }

    /// Apply a control word to the innermost open scope.
    fn apply_control_word(&mut self, word: &ControlWord<'_>) -> RtfResult<()> {
        let breaks = self.options.paragraph_breaks;
        let painter = self.current_painter_mut()?;

        match word.kind {
            ControlWordKind::Bold => painter.bold = word.toggle(),
            ControlWordKind::Italic => painter.italic = word.toggle(),
            ControlWordKind::Underline => painter.underline = word.toggle(),
            ControlWordKind::UnderlineNone => painter.underline = false,
            ControlWordKind::FontNumber => {
                match word.parameter.and_then(|p| FontRef::try_from(p).ok()) {
                    Some(font_ref) => painter.font_ref = Some(font_ref),
                    None => log::debug!("ignoring font reference {:?}", word.parameter),
                }
            },
            ControlWordKind::FontSize => {
                if let Some(size) = word.parameter.filter(|&s| s > 0) {
                    painter.font_size = size;
                }
            },
            ControlWordKind::Plain => *painter = Painter::default(),
            ControlWordKind::Paragraph | ControlWordKind::LineBreak if breaks => {
                self.push_break("\n")?
            },
            ControlWordKind::Tab if breaks => self.push_break("\t")?,
            _ => {},
        }

        Ok(())
    }

    fn push_break(&mut self, text: &str) -> RtfResult<()> {
        let painter = *self.current_painter()?;
        self.body.push(StyleBlock::new(painter, text));
        Ok(())
    }

    /// Header table kind if `index` opens a `{\fonttbl`, `{\colortbl` or `{\stylesheet` group.
    fn header_table_at(&self, index: usize) -> Option<ControlWordKind> {
        match self.tokens.get(index..index + 2)? {
            [Token::GroupStart, Token::ControlWord(word)] if word.kind.is_header_table() => {
                Some(word.kind)
            },
            _ => None,
        }
    }

    /// Range from the `GroupStart` at `start` through its matching `GroupEnd`.
    ///
    /// Depth is counted from zero after the opening brace; the group ends
    /// where it goes negative. A group still open at end of input is an error.
    fn group_span(&self, start: usize) -> RtfResult<Range<usize>> {
        let mut depth = 0i32;
        for (offset, token) in self.tokens[start + 1..].iter().enumerate() {
            match token {
                Token::GroupStart => depth += 1,
                Token::GroupEnd => {
                    depth -= 1;
                    if depth < 0 {
                        return Ok(start..start + offset + 2);
                    }
                },
                _ => {},
            }
        }
        Err(RtfError::UnbalancedGroup(format!(
            "group opened at token {start} is never closed"
        )))
    }

    /// End of the consumed span starting at `index`, if any.
    #[inline]
    fn consumed_end(&self, index: usize) -> Option<usize> {
        self.consumed
            .iter()
            .find(|span| span.start == index)
            .map(|span| span.end)
    }

    /// Get current painter (immutable).
    fn current_painter(&self) -> RtfResult<&Painter> {
        self.painters
            .last()
            .ok_or_else(|| RtfError::UnbalancedGroup("no open scope".to_string()))
    }

    /// Get current painter (mutable).
    fn current_painter_mut(&mut self) -> RtfResult<&mut Painter> {
        self.painters
            .last_mut()
            .ok_or_else(|| RtfError::UnbalancedGroup("no open scope".to_string()))
    }
}
