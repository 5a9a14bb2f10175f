//! Configuration types for parsing and rendering.

/// How a newly opened group seeds its formatting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeInheritance {
    /// Every group starts from default formatting, regardless of the
    /// enclosing scope.
    #[default]
    Reset,
    /// Every group starts from a copy of the enclosing scope's formatting,
    /// so `{\i a {\b b}}` renders `b` bold and italic.
    Inherit,
}

/// Options controlling how a token stream becomes a document.
///
/// # Examples
///
/// ```rust
/// use rtfscope::{ParseOptions, ScopeInheritance};
///
/// let options = ParseOptions::new()
///     .with_scope_inheritance(ScopeInheritance::Inherit)
///     .with_paragraph_breaks(true);
/// assert!(options.paragraph_breaks);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Formatting seed for nested groups
    pub scope_inheritance: ScopeInheritance,
    /// Emit `\n` for `\par` and `\line`, and `\t` for `\tab`
    pub paragraph_breaks: bool,
}

impl ParseOptions {
    /// Create a new `ParseOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how nested groups seed their formatting.
    #[inline]
    pub fn with_scope_inheritance(mut self, inheritance: ScopeInheritance) -> Self {
        self.scope_inheritance = inheritance;
        self
    }

    /// Set whether paragraph, line and tab control words produce text.
    #[inline]
    pub fn with_paragraph_breaks(mut self, enabled: bool) -> Self {
        self.paragraph_breaks = enabled;
        self
    }
}

/// Options controlling HTML rendering.
///
/// # Examples
///
/// ```rust
/// use rtfscope::{HtmlOptions, RtfDocument};
///
/// let doc = RtfDocument::parse(r"{\rtf1 {\b a < b}}")?;
/// assert_eq!(doc.to_html(), "<bold>a < b</bold>");
///
/// let options = HtmlOptions::new().with_escape_text(true);
/// assert_eq!(doc.to_html_with_options(&options), "<bold>a &lt; b</bold>");
/// # Ok::<(), rtfscope::RtfError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Escape `&`, `<` and `>` in text; off by default, so text is emitted as is
    pub escape_text: bool,
    /// Render `\n` in text as `<br>`
    pub line_breaks: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            escape_text: false,
            line_breaks: false,
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether text is HTML-escaped.
    #[inline]
    pub fn with_escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Set whether line breaks become `<br>` elements.
    #[inline]
    pub fn with_line_breaks(mut self, enabled: bool) -> Self {
        self.line_breaks = enabled;
        self
    }
}
