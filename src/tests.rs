//! End-to-end tests for parsing and rendering

use super::*;
use std::io::Write as _;

const SAMPLE: &str =
    r"{\rtf1\ansi{\fonttbl\f0\fswiss Helvetica;}\f0\pard This is some {\b bold} text.\par}";

#[test]
fn test_sample_document_blocks() {
    let doc = parse(SAMPLE).unwrap();
    let blocks = doc.blocks();

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].text(), "This is some ");
    assert!(blocks[0].painter.is_plain());
    assert_eq!(blocks[1].text(), "bold");
    assert!(blocks[1].painter.bold);
    assert_eq!(blocks[2].text(), " text.");
    assert!(blocks[2].painter.is_plain());

    assert_eq!(doc.font_table()[&0].name, "Helvetica");
    assert_eq!(doc.font_table()[&0].family, FontFamily::Swiss);
    assert_eq!(doc.character_set(), CharacterSet::Ansi);
}

#[test]
fn test_sample_document_rendering() {
    let doc = parse(SAMPLE).unwrap();
    assert_eq!(doc.to_text(), "This is some bold text.");
    assert_eq!(doc.to_html(), "This is some <bold>bold</bold> text.");
}

#[test]
fn test_parse_is_pure() {
    assert_eq!(parse(SAMPLE).unwrap(), parse(SAMPLE).unwrap());
}

#[test]
fn test_extra_group_end() {
    let err = parse(r"{\rtf1 a}}").unwrap_err();
    assert!(matches!(err, RtfError::UnbalancedGroup(_)));
    assert!(err.to_string().starts_with("Unbalanced groups"));
}

#[test]
fn test_unclosed_group() {
    assert!(matches!(
        parse(r"{\rtf1{\i a}"),
        Err(RtfError::UnbalancedGroup(_))
    ));
}

#[test]
fn test_group_filler_dropped() {
    let doc = parse(r"{\rtf1 a{filler\b x}b}").unwrap();
    assert_eq!(doc.to_text(), "axb");
    assert_eq!(doc.to_html(), "a<bold>x</bold>b");
}

#[test]
fn test_unterminated_destinations() {
    for source in [
        r"{\fonttbl\f0 A;",
        r"{\rtf1\ansi{\fonttbl\f0 A;}{\colortbl;\red0\green0\blue0;",
        r"{\info{\title T}",
        r"{\rtf1{\info{\title T}{\author A}",
    ] {
        assert!(
            matches!(parse(source), Err(RtfError::UnbalancedGroup(_))),
            "{source}"
        );
    }
}

#[test]
fn test_escaped_braces_render_literally() {
    let doc = parse(r"{\rtf1 a \{not a group\} b}").unwrap();
    assert_eq!(doc.to_text(), "a {not a group} b");
    assert_eq!(doc.to_html(), "a {not a group} b");
}

#[test]
fn test_ignorable_destination_has_no_effect() {
    assert!(tokenize(r"{\*\expandedcolortbl;;}").is_empty());

    let with = parse(r"{\rtf1 a{\*\expandedcolortbl;;}b}").unwrap();
    let without = parse(r"{\rtf1 ab}").unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_scope_inheritance_choices() {
    let source = r"{\rtf1 {\i italic {\b both}}}";

    let reset = parse(source).unwrap();
    let both = reset.blocks()[1].painter;
    assert!(both.bold);
    assert!(!both.italic);
    assert_eq!(reset.to_html(), "<italic>italic </italic><bold>both</bold>");

    let options = ParseOptions::new().with_scope_inheritance(ScopeInheritance::Inherit);
    let inherit = parse_with_options(source, &options).unwrap();
    let both = inherit.blocks()[1].painter;
    assert!(both.bold);
    assert!(both.italic);
    assert_eq!(
        inherit.to_html(),
        "<italic>italic </italic><bold><italic>both</italic></bold>"
    );
}

#[test]
fn test_full_header_and_info() {
    let source = concat!(
        r"{\rtf1\mac\ansicpg10000",
        r"{\fonttbl{\f0\fswiss\fcharset0 Helvetica;}{\f1\fmodern\fcharset77 Menlo;}}",
        r"{\colortbl;\red255\green255\blue255;\red0\green0\blue0;}",
        r"{\stylesheet{\s0\snext0 Normal;}{\s1\sbasedon0\snext0 heading 1;}}",
        r"{\info{\title Minutes}{\author Alex}{\creatim\yr2023\mo6\dy1\hr10\min0}{\nofwords42}}",
        r"\pard\f1\fs20 caf\'8e {\ul done}\par}",
    );
    let doc = parse(source).unwrap();

    assert_eq!(doc.character_set(), CharacterSet::Mac);
    assert_eq!(doc.font_table().len(), 2);
    assert_eq!(doc.font_table()[&1].character_set, Some(CharacterSet::Mac));
    assert_eq!(doc.color_table()[&2], Color::new(0, 0, 0));
    assert_eq!(
        doc.stylesheet().get(1).and_then(|s| s.based_on),
        Some(0)
    );

    let info = doc.info();
    assert_eq!(info.title, "Minutes");
    assert_eq!(info.author, "Alex");
    assert_eq!(info.words, 42);
    assert_eq!(
        info.creation_time.map(|t| t.to_string()),
        Some("2023-06-01 10:00:00".to_string())
    );

    assert_eq!(doc.to_text(), "caf\u{e9} done");
    let first = doc.blocks()[0].painter;
    assert_eq!(first.font_ref, Some(1));
    assert_eq!(first.font_size, 20);
    assert!(doc.blocks()[1].painter.underline);
}

#[test]
fn test_open_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sample.rtf");
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(SAMPLE.as_bytes()).expect("write file");
    drop(file);

    let doc = RtfDocument::open(&path).expect("open document");
    assert_eq!(doc, parse(SAMPLE).unwrap());
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = RtfDocument::open(dir.path().join("missing.rtf"));
    assert!(matches!(result, Err(RtfError::Io(_))));
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for group contents that always balance.
    fn balanced_strategy() -> impl Strategy<Value = String> {
        let leaf = prop_oneof![
            "[a-z][a-z .,]{0,12}",
            Just(r"\b ".to_string()),
            Just(r"\i0 ".to_string()),
            Just(r"\ul ".to_string()),
            Just(r"\fs28 ".to_string()),
            Just(r"\{".to_string()),
            Just(r"\}".to_string()),
            Just(r"{\*\generator x;}".to_string()),
        ];
        leaf.prop_recursive(4, 48, 5, |inner| {
            prop::collection::vec(inner, 0..5).prop_map(|parts| format!("{{{}}}", parts.concat()))
        })
    }

    /// Strategy for balanced group contents without escaped characters.
    fn escape_free_strategy() -> impl Strategy<Value = String> {
        let leaf = prop_oneof![
            "[a-z][a-z .,;]{0,12}",
            Just(r"\b ".to_string()),
            Just(r"\i ".to_string()),
            Just(r"\ulnone ".to_string()),
            Just(r"\par ".to_string()),
            Just(r"\foo12 ".to_string()),
            Just(r"{\*\generator x;}".to_string()),
        ];
        leaf.prop_recursive(4, 48, 5, |inner| {
            prop::collection::vec(inner, 0..5).prop_map(|parts| format!("{{{}}}", parts.concat()))
        })
    }

    /// Strategy for plain words that may contain HTML-significant characters.
    fn markup_text_strategy() -> impl Strategy<Value = String> {
        "[a-z<>&\"][a-z<>&\" ]{0,20}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_balanced_input_parses(body in prop::collection::vec(balanced_strategy(), 0..6)) {
            let source = format!(r"{{\rtf1 {}}}", body.concat());

            let doc = parse(&source);
            prop_assert!(doc.is_ok(), "parse failed for {:?}: {:?}", source, doc.err());

            let extra = format!("{source}}}");
            prop_assert!(matches!(parse(&extra), Err(RtfError::UnbalancedGroup(_))));
        }

        #[test]
        fn prop_parse_is_deterministic(body in prop::collection::vec(balanced_strategy(), 0..6)) {
            let source = format!(r"{{\rtf1 {}}}", body.concat());
            prop_assert_eq!(parse(&source).ok(), parse(&source).ok());
        }

        #[test]
        fn prop_text_has_no_markup(body in prop::collection::vec(escape_free_strategy(), 0..6)) {
            let source = format!(r"{{\rtf1\ansi{{\fonttbl\f0 Arial;}}\f0 {}}}", body.concat());
            let doc = parse(&source).unwrap();

            let text = doc.to_text();
            prop_assert!(!text.contains(['{', '}', '\\']), "markup in {:?}", text);
        }

        #[test]
        fn prop_html_text_is_escaped(text in markup_text_strategy()) {
            let doc = parse(&format!(r"{{\rtf1 {{\b {text}}}}}")).unwrap();

            let html = doc.to_html_with_options(&HtmlOptions::new().with_escape_text(true));
            let inner = html
                .strip_prefix("<bold>")
                .and_then(|rest| rest.strip_suffix("</bold>"))
                .unwrap_or_default();
            prop_assert!(!inner.contains('<'));
            prop_assert!(!inner.contains('>'));

            prop_assert_eq!(doc.to_text(), text);
        }
    }
}
