//! Command-line tool for reading RTF documents.
//!
//! # Usage
//!
//! ```sh
//! rtfscope letter.rtf
//! rtfscope letter.rtf --format html --inherit
//! rtfscope letter.rtf --format json
//! ```
//!
//! Set `RUST_LOG=debug` to see parser diagnostics.

use clap::{Parser, ValueEnum};
use rtfscope::{HtmlOptions, ParseOptions, RtfDocument, ScopeInheritance};
use std::fs;
use std::path::PathBuf;

/// Print the text, HTML or structure of an RTF document
#[derive(Parser, Debug)]
#[command(name = "rtfscope", version)]
struct Args {
    /// RTF file to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Nested groups start from the enclosing group's formatting
    #[arg(long)]
    inherit: bool,

    /// Emit line breaks for \par and \line, and tabs for \tab
    #[arg(long)]
    paragraph_breaks: bool,

    /// Render line breaks as <br> in HTML output
    #[arg(long)]
    html_line_breaks: bool,

    /// Escape &, < and > in HTML output
    #[arg(long)]
    escape_html: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain text
    Text,
    /// Bold, italic and underline tags
    Html,
    /// Structural dump of the parsed document
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if !args.input.is_file() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    let inheritance = if args.inherit {
        ScopeInheritance::Inherit
    } else {
        ScopeInheritance::Reset
    };
    let options = ParseOptions::new()
        .with_scope_inheritance(inheritance)
        .with_paragraph_breaks(args.paragraph_breaks);

    let bytes = fs::read(&args.input)?;
    let source = rtfscope::encoding::decode_input(&bytes);
    let doc = RtfDocument::parse_with_options(&source, &options)?;
    log::debug!("{}: {} blocks", args.input.display(), doc.blocks().len());

    let output = match args.format {
        OutputFormat::Text => doc.to_text(),
        OutputFormat::Html => {
            let html_options = HtmlOptions::new()
                .with_escape_text(args.escape_html)
                .with_line_breaks(args.html_line_breaks);
            doc.to_html_with_options(&html_options)
        },
        OutputFormat::Json => doc.to_json_pretty()?,
    };
    println!("{output}");

    Ok(())
}
