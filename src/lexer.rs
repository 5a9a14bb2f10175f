//! RTF lexer/tokenizer.
//!
//! Turns the raw document into a flat, ordered token vector in a single
//! left-to-right pass. Runs of literal text and control words extend to the
//! next unescaped delimiter (`\`, `{` or `}`), located with `memchr3`.
//!
//! Tokenization never fails: a control word with a malformed parameter is
//! dropped on its own and scanning continues.

use crate::chars::{is_alpha_lower, is_blank, is_delimiter, is_whitespace};
use crate::control::{ControlWord, ControlWordKind};
use crate::encoding::{charset_encoding, codepage_to_encoding};
use crate::types::CharacterSet;
use encoding_rs::Encoding;
use memchr::{memchr2, memchr3};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Token types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Opening brace
    GroupStart,
    /// Closing brace
    GroupEnd,
    /// Literal text
    Text(Cow<'a, str>),
    /// Control word
    ControlWord(ControlWord<'a>),
    /// Forced line break (`\` followed by a newline)
    Crlf,
    /// `\*` met outside of any group
    IgnorableMarker,
}

impl Token<'_> {
    /// The control word kind, if this is a control word.
    #[inline]
    pub fn control_kind(&self) -> Option<ControlWordKind> {
        match self {
            Token::ControlWord(word) => Some(word.kind),
            _ => None,
        }
    }
}

/// Tokenize a whole document.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).tokenize()
}

/// RTF Lexer.
pub struct Lexer<'a> {
    /// Source input
    input: &'a str,
    /// Current position in bytes
    pos: usize,
    /// Tokens emitted so far
    tokens: Vec<Token<'a>>,
    /// Indices in `tokens` of the `GroupStart` of every open group
    open_groups: SmallVec<[usize; 16]>,
    /// Encoding used for `\'hh` escapes
    encoding: &'static Encoding,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            tokens: Vec::new(),
            open_groups: SmallVec::new(),
            encoding: charset_encoding(CharacterSet::default()),
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        let input = self.input;
        let bytes = input.as_bytes();

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'{' => {
                    self.open_groups.push(self.tokens.len());
                    self.tokens.push(Token::GroupStart);
                    self.pos += 1;
                    self.skip_group_filler();
                },
                b'}' => {
                    self.open_groups.pop();
                    self.tokens.push(Token::GroupEnd);
                    self.pos += 1;
                },
                b'\\' => self.scan_backslash(),
                _ => self.scan_text(),
            }
        }

        log::trace!("tokenized {} bytes into {} tokens", bytes.len(), self.tokens.len());
        self.tokens
    }

    /// Position of the next delimiter at or after `from`, or the input length.
    #[inline]
    fn next_delimiter(&self, from: usize) -> usize {
        let bytes = self.input.as_bytes();
        if from >= bytes.len() {
            return bytes.len();
        }
        memchr3(b'\\', b'{', b'}', &bytes[from..]).map_or(bytes.len(), |i| from + i)
    }

    /// Skip everything between an opening brace and the next delimiter.
    fn skip_group_filler(&mut self) {
        let end = self.next_delimiter(self.pos);
        if end > self.pos {
            log::trace!("skipping group filler {:?}", &self.input[self.pos..end]);
        }
        self.pos = end;
    }

    /// Dispatch on the byte following a backslash.
    fn scan_backslash(&mut self) {
        let input = self.input;
        let bytes = input.as_bytes();
        let Some(&next) = bytes.get(self.pos + 1) else {
            // Dangling backslash at end of input
            self.pos += 1;
            return;
        };

        match next {
            b if is_delimiter(b) => {
                let end = self.next_delimiter(self.pos + 2);
                self.push_text(&input[self.pos + 1..end]);
                self.pos = end;
            },
            b'\n' | b'\r' => {
                self.tokens.push(Token::Crlf);
                self.pos += 2;
                if next == b'\r' && bytes.get(self.pos) == Some(&b'\n') {
                    self.pos += 1;
                }
            },
            b'*' => self.discard_ignorable_group(),
            b'\'' => self.scan_hex_escape(),
            b'~' => self.push_symbol("\u{00A0}"),
            b'_' => self.push_symbol("\u{2011}"),
            b'-' => self.push_symbol("\u{00AD}"),
            b if is_alpha_lower(b) => self.scan_control_word(),
            _ => {
                let width = input[self.pos + 1..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                log::trace!(
                    "ignoring control symbol {:?} at byte {}",
                    &input[self.pos..self.pos + 1 + width],
                    self.pos
                );
                self.pos += 1 + width;
            },
        }
    }

    /// Scan `\name[param][;][ tail]` up to the next delimiter.
    fn scan_control_word(&mut self) {
        let input = self.input;
        let start = self.pos + 1;
        let end = self.next_delimiter(start);
        let run = &input[start..end];
        self.pos = end;

        let (head, tail) = match run.bytes().position(is_whitespace) {
            Some(index) => (&run[..index], &run[index + 1..]),
            None => (run, ""),
        };
        let head = head.strip_suffix(';').unwrap_or(head);

        match ControlWord::parse(head) {
            Ok(word) => {
                self.track_encoding(&word);
                self.tokens.push(Token::ControlWord(word));
            },
            Err(e) => log::warn!("dropping control word at byte {}: {}", start - 1, e),
        }

        if !is_blank(tail) {
            self.push_text(tail);
        }
    }

    /// Follow character set declarations so hex escapes decode correctly.
    fn track_encoding(&mut self, word: &ControlWord<'_>) {
        match word.kind {
            ControlWordKind::CharacterSet(charset) => self.encoding = charset_encoding(charset),
            ControlWordKind::AnsiCodePage => {
                if let Some(encoding) = word.parameter.and_then(codepage_to_encoding) {
                    self.encoding = encoding;
                }
            },
            _ => {},
        }
    }

    /// Decode one or more consecutive `\'hh` escapes plus the literal run after them.
    fn scan_hex_escape(&mut self) {
        let bytes = self.input.as_bytes();
        let mut raw = SmallVec::<[u8; 8]>::new();

        while bytes.get(self.pos) == Some(&b'\\') && bytes.get(self.pos + 1) == Some(&b'\'') {
            let digits = bytes.get(self.pos + 2..self.pos + 4);
            let Some(value) = digits
                .filter(|d| d.iter().all(u8::is_ascii_hexdigit))
                .and_then(|d| std::str::from_utf8(d).ok())
                .and_then(|d| u8::from_str_radix(d, 16).ok())
            else {
                log::debug!("invalid hex escape at byte {}", self.pos);
                self.pos += 2;
                break;
            };
            raw.push(value);
            self.pos += 4;
        }

        let end = self.next_delimiter(self.pos);
        let mut text = if raw.is_empty() {
            String::new()
        } else {
            let (decoded, _) = self.encoding.decode_without_bom_handling(&raw);
            decoded.into_owned()
        };
        text.push_str(&strip_line_breaks(&self.input[self.pos..end]));
        self.pos = end;

        if !text.is_empty() {
            self.tokens.push(Token::Text(Cow::Owned(text)));
        }
    }

    /// Emit a control symbol's character followed by the literal run after it.
    fn push_symbol(&mut self, symbol: &str) {
        let end = self.next_delimiter(self.pos + 2);
        let mut text = String::from(symbol);
        text.push_str(&strip_line_breaks(&self.input[self.pos + 2..end]));
        self.tokens.push(Token::Text(Cow::Owned(text)));
        self.pos = end;
    }

    /// Drop the whole group that an ignorable destination marker sits in.
    ///
    /// Tokens already emitted for the group (its `GroupStart` and anything
    /// after it) are truncated, then input is skipped up to and including the
    /// brace that closes the group.
    fn discard_ignorable_group(&mut self) {
        self.pos += 2;
        match self.open_groups.pop() {
            Some(start) => self.tokens.truncate(start),
            None => self.tokens.push(Token::IgnorableMarker),
        }

        let bytes = self.input.as_bytes();
        let mut depth = 0i32;
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'\\' => self.pos = (self.pos + 2).min(bytes.len()),
                b'{' => {
                    depth += 1;
                    self.pos += 1;
                },
                b'}' => {
                    depth -= 1;
                    self.pos += 1;
                    if depth < 0 {
                        break;
                    }
                },
                _ => self.pos = self.next_delimiter(self.pos),
            }
        }
    }

    /// Scan a literal run, emitting it unless it is only whitespace.
    fn scan_text(&mut self) {
        let input = self.input;
        let end = self.next_delimiter(self.pos);
        let run = &input[self.pos..end];
        self.pos = end;

        if !is_blank(run) {
            self.push_text(run);
        }
    }

    #[inline]
    fn push_text(&mut self, text: &'a str) {
        let text = strip_line_breaks(text);
        if !text.is_empty() {
            self.tokens.push(Token::Text(text));
        }
    }
}

/// Raw line breaks are not content in RTF; only `\par`, `\line` and `\<newline>` are.
fn strip_line_breaks(text: &str) -> Cow<'_, str> {
    if memchr2(b'\r', b'\n', text.as_bytes()).is_none() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| c != '\r' && c != '\n').collect())
    }
}
