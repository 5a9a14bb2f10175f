//! Rtfscope - a scope-aware RTF reader
//!
//! Reads Rich Text Format documents into a structured, owned document model
//! and renders them as plain text or a small HTML subset.
//!
//! # Features
//!
//! - **Tokenizer**: single pass over the source into a flat token vector
//! - **Header tables**: font table, color table and stylesheet
//! - **Information group**: title, author, counters and timestamps
//! - **Scoped formatting**: bold, italic, underline, font and size per group
//! - **Renderers**: text and HTML, into any `fmt::Write` sink
//! - **Structural dump**: every model type is `serde`-serializable
//!
//! # Example
//!
//! ```rust
//! use rtfscope::parse;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = parse(r"{\rtf1\ansi{\fonttbl\f0\fswiss Helvetica;}\f0\pard This is some {\b bold} text.\par}")?;
//!
//! assert_eq!(doc.font_table()[&0].name, "Helvetica");
//! assert_eq!(doc.to_text(), "This is some bold text.");
//! assert_eq!(doc.to_html(), "This is some <bold>bold</bold> text.");
//! # Ok(())
//! # }
//! ```

pub mod chars;
pub mod config;
pub mod control;
pub mod document;
pub mod encoding;
pub mod error;
pub mod header;
pub mod info;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{HtmlOptions, ParseOptions, ScopeInheritance};
pub use control::{ControlWord, ControlWordKind};
pub use document::RtfDocument;
pub use error::{RtfError, RtfResult};
pub use info::InformationGroup;
pub use lexer::{Lexer, Token};
pub use types::{
    CharacterSet, Color, ColorRef, ColorTable, Font, FontFamily, FontRef, FontTable, Header,
    Painter, Style, StyleBlock, StyleKind, StyleSheet,
};

/// Parse an RTF document with default options.
#[inline]
pub fn parse(input: &str) -> RtfResult<RtfDocument> {
    RtfDocument::parse(input)
}

/// Parse an RTF document with custom options.
#[inline]
pub fn parse_with_options(input: &str, options: &ParseOptions) -> RtfResult<RtfDocument> {
    RtfDocument::parse_with_options(input, options)
}

/// Tokenize an RTF document without parsing it.
#[inline]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    lexer::tokenize(input)
}
