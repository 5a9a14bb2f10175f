//! RTF document representation.

use crate::config::{HtmlOptions, ParseOptions};
use crate::encoding::decode_input;
use crate::error::RtfResult;
use crate::info::InformationGroup;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::render;
use crate::types::{CharacterSet, ColorTable, FontTable, Header, StyleBlock, StyleSheet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// RTF Document.
///
/// Owns everything it holds; nothing borrows from the source text, and the
/// document never changes after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RtfDocument {
    /// Header tables and character set
    header: Header,
    /// Information group
    info: InformationGroup,
    /// Style blocks in document order
    body: Vec<StyleBlock>,
}

impl RtfDocument {
    pub(crate) fn from_parts(header: Header, info: InformationGroup, body: Vec<StyleBlock>) -> Self {
        Self { header, info, body }
    }

    /// Parse an RTF document from a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtfscope::RtfDocument;
    ///
    /// let doc = RtfDocument::parse(r"{\rtf1\ansi Hello {\b World}}")?;
    /// assert_eq!(doc.to_text(), "Hello World");
    /// # Ok::<(), rtfscope::RtfError>(())
    /// ```
    pub fn parse(input: &str) -> RtfResult<Self> {
        Self::parse_with_options(input, &ParseOptions::default())
    }

    /// Parse an RTF document from a string with custom options.
    pub fn parse_with_options(input: &str, options: &ParseOptions) -> RtfResult<Self> {
        let tokens = Lexer::new(input).tokenize();
        Parser::new(&tokens, options).parse()
    }

    /// Parse an RTF document from bytes.
    ///
    /// Input that is not valid UTF-8 is decoded as Windows-1252.
    pub fn from_bytes(bytes: &[u8]) -> RtfResult<Self> {
        Self::parse(&decode_input(bytes))
    }

    /// Parse an RTF document from a file.
    ///
    /// ```rust,no_run
    /// use rtfscope::RtfDocument;
    ///
    /// let doc = RtfDocument::open("document.rtf")?;
    /// println!("{}", doc.to_text());
    /// # Ok::<(), rtfscope::RtfError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> RtfResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Get the style blocks.
    #[inline]
    pub fn blocks(&self) -> &[StyleBlock] {
        &self.body
    }

    /// Get the header tables.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Get the document character set.
    #[inline]
    pub fn character_set(&self) -> CharacterSet {
        self.header.character_set
    }

    /// Get the font table.
    #[inline]
    pub fn font_table(&self) -> &FontTable {
        &self.header.font_table
    }

    /// Get the color table.
    #[inline]
    pub fn color_table(&self) -> &ColorTable {
        &self.header.color_table
    }

    /// Get the stylesheet.
    #[inline]
    pub fn stylesheet(&self) -> &StyleSheet {
        &self.header.stylesheet
    }

    /// Get the information group.
    #[inline]
    pub fn info(&self) -> &InformationGroup {
        &self.info
    }

    /// Get all text content from the document.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.body.iter().map(|b| b.text.len()).sum());
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    /// Render the document as HTML with default options.
    ///
    /// Text is written unescaped; use [`HtmlOptions::with_escape_text`] for
    /// output that goes into a real HTML page.
    pub fn to_html(&self) -> String {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Render the document as HTML.
    pub fn to_html_with_options(&self, options: &HtmlOptions) -> String {
        let mut out = String::new();
        let _ = self.write_html(options, &mut out);
        out
    }

    /// Write the document text into a sink.
    pub fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        render::write_text(&self.body, out)
    }

    /// Write the document as HTML into a sink.
    pub fn write_html<W: fmt::Write>(&self, options: &HtmlOptions, out: &mut W) -> fmt::Result {
        render::write_html(&self.body, options, out)
    }

    /// Dump the document structure as compact JSON.
    pub fn to_json(&self) -> RtfResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Dump the document structure as indented JSON.
    pub fn to_json_pretty(&self) -> RtfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RtfDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let doc = RtfDocument::parse(
            r"{\rtf1\pc{\fonttbl\f0 Courier;}{\colortbl;\red1\green2\blue3;}{\info{\title T}}\f0 x}",
        )
        .unwrap();

        assert_eq!(doc.character_set(), CharacterSet::Pc);
        assert_eq!(doc.font_table().len(), 1);
        assert_eq!(doc.color_table().len(), 1);
        assert!(doc.stylesheet().is_empty());
        assert_eq!(doc.info().title, "T");
        assert_eq!(doc.blocks().len(), 1);
        assert_eq!(doc.to_string(), "x");
    }

    #[test]
    fn test_from_bytes_windows_1252_fallback() {
        let doc = RtfDocument::from_bytes(b"{\\rtf1 caf\xe9}").unwrap();
        assert_eq!(doc.to_text(), "caf\u{e9}");
    }

    #[test]
    fn test_json_roundtrip() {
        let doc = RtfDocument::parse(r"{\rtf1{\info{\creatim\yr2020\mo1\dy2}}{\b bold}}").unwrap();
        let json = doc.to_json().unwrap();
        let restored: RtfDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, doc);
        assert!(doc.to_json_pretty().unwrap().contains("\"bold\": true"));
    }
}
