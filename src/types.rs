//! RTF document type definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Font reference (key into the font table).
pub type FontRef = u16;

/// Color reference (key into the color table).
pub type ColorRef = u16;

/// Font table keyed by the number that follows `\f`.
pub type FontTable = BTreeMap<FontRef, Font>;

/// Color table keyed from 1; key 0 is the implicit "auto" color.
pub type ColorTable = BTreeMap<ColorRef, Color>;

/// Character set encoding for RTF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterSet {
    /// ANSI (Windows-1252 / CP1252)
    #[default]
    Ansi,
    /// Mac (Mac Roman)
    Mac,
    /// PC (DOS / CP437)
    Pc,
    /// PC (DOS / CP850)
    Pca,
}

impl CharacterSet {
    /// Map an `\fcharsetN` value to a character set, if it names one.
    pub fn from_fcharset(value: i32) -> Option<Self> {
        match value {
            0 => Some(CharacterSet::Ansi),
            77 => Some(CharacterSet::Mac),
            254 => Some(CharacterSet::Pc),
            255 => Some(CharacterSet::Pca),
            _ => None,
        }
    }
}

/// Font family categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Nil (unknown or default)
    #[default]
    Nil,
    /// Roman (serif) fonts
    Roman,
    /// Swiss (sans-serif) fonts
    Swiss,
    /// Modern (monospace) fonts
    Modern,
    /// Script fonts
    Script,
    /// Decorative fonts
    Decor,
    /// Technical, symbol, and mathematical fonts
    Tech,
    /// Arabic, Hebrew, or other bidirectional fonts
    Bidi,
}

/// Font definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Font {
    /// Font name, without the `;` terminator
    pub name: String,
    /// Character set declared with `\fcharset`
    pub character_set: Option<CharacterSet>,
    /// Font family category
    pub family: FontFamily,
}

/// RTF color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Color {
    /// Create a new color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Style type, from the designator that introduced the style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StyleKind {
    /// `\s` paragraph style
    #[default]
    Paragraph,
    /// `\cs` character style
    Character,
    /// `\ds` section style
    Section,
}

/// Stylesheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Style {
    /// Style number
    pub number: i32,
    /// Style name, without the `;` terminator
    pub name: String,
    /// Style type
    pub kind: StyleKind,
    /// Based-on style number (`\sbasedon`)
    pub based_on: Option<i32>,
    /// Style for the following paragraph (`\snext`)
    pub next: Option<i32>,
}

/// Stylesheet containing all style definitions, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleSheet {
    styles: Vec<Style>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style; a later style with the same number and kind replaces the earlier one.
    pub fn add(&mut self, style: Style) {
        match self
            .styles
            .iter_mut()
            .find(|s| s.number == style.number && s.kind == style.kind)
        {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }

    /// Get the first style with the given number.
    pub fn get(&self, number: i32) -> Option<&Style> {
        self.styles.iter().find(|s| s.number == number)
    }

    /// Get a style by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Get all styles.
    #[inline]
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Default font size in half-points (12pt).
pub const DEFAULT_FONT_SIZE: i32 = 24;

/// Character formatting in effect at a point of the body.
///
/// Each open group owns its own copy, so a block's painter can never change
/// after the block is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Painter {
    /// Font reference, once `\f` has been seen in scope
    pub font_ref: Option<FontRef>,
    /// Font size in half-points
    pub font_size: i32,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
}

impl Default for Painter {
    fn default() -> Self {
        Self {
            font_ref: None,
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl Painter {
    /// Whether no character attribute is switched on.
    #[inline]
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline)
    }
}

/// A contiguous run of text sharing one formatting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBlock {
    /// Formatting of the run
    pub painter: Painter,
    /// Text content
    pub text: String,
}

impl StyleBlock {
    /// Create a new style block.
    #[inline]
    pub fn new(painter: Painter, text: impl Into<String>) -> Self {
        Self {
            painter,
            text: text.into(),
        }
    }

    /// Get the text content.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Tables declared at the start of the document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Document character set (`\ansi`, `\mac`, `\pc`, `\pca`)
    pub character_set: CharacterSet,
    /// Font table
    pub font_table: FontTable,
    /// Color table
    pub color_table: ColorTable,
    /// Stylesheet
    pub stylesheet: StyleSheet,
}
