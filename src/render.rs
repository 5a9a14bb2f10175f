//! Text and HTML renderers for a parsed body.
//!
//! Renderers write into any [`std::fmt::Write`] sink and fail only when the
//! sink does.

use crate::config::HtmlOptions;
use crate::types::{Painter, StyleBlock};
use smallvec::SmallVec;
use std::fmt::{self, Write};

/// Concatenate the text of every block in order.
pub fn write_text<W: Write>(blocks: &[StyleBlock], out: &mut W) -> fmt::Result {
    for block in blocks {
        out.write_str(&block.text)?;
    }
    Ok(())
}

/// Render every block as HTML.
///
/// Each block is wrapped independently in `<bold>`, `<italic>` and `<u>`
/// for its active attributes, opened in that order and closed in reverse.
/// Adjacent blocks with the same formatting are not merged.
pub fn write_html<W: Write>(
    blocks: &[StyleBlock],
    options: &HtmlOptions,
    out: &mut W,
) -> fmt::Result {
    for block in blocks {
        let tags = open_tags(&block.painter);
        for tag in &tags {
            write!(out, "<{tag}>")?;
        }
        write_html_text(&block.text, options, out)?;
        for tag in tags.iter().rev() {
            write!(out, "</{tag}>")?;
        }
    }
    Ok(())
}

/// Tag names for a painter's attributes, in opening order.
fn open_tags(painter: &Painter) -> SmallVec<[&'static str; 3]> {
    let mut tags = SmallVec::new();
    if painter.bold {
        tags.push("bold");
    }
    if painter.italic {
        tags.push("italic");
    }
    if painter.underline {
        tags.push("u");
    }
    tags
}

fn write_html_text<W: Write>(text: &str, options: &HtmlOptions, out: &mut W) -> fmt::Result {
    if !options.escape_text && !options.line_breaks {
        return out.write_str(text);
    }

    let mut last = 0;
    for (index, ch) in text.char_indices() {
        let replacement = match ch {
            '&' if options.escape_text => "&amp;",
            '<' if options.escape_text => "&lt;",
            '>' if options.escape_text => "&gt;",
            '\n' if options.line_breaks => "<br>",
            _ => continue,
        };
        out.write_str(&text[last..index])?;
        out.write_str(replacement)?;
        last = index + ch.len_utf8();
    }
    out.write_str(&text[last..])
}
