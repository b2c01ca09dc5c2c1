use crate::entities::{decode_entities, escape_text};
use crate::repair::{collapse_whitespace, detag, repair_text};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref TAG_NAME: Regex = Regex::new(r"^</?\s*([A-Za-z][\w:-]*)").unwrap();
    static ref PRESENTATION_ATTR: Regex = Regex::new(
        r#"(?i)\s+(?:style|class|width|align|valign)\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>"']+)"#
    )
    .unwrap();
}

fn is_structural(name: &str) -> bool {
    matches!(
        name,
        "table" | "caption" | "colgroup" | "col" | "thead" | "tbody" | "tfoot" | "tr" | "th" | "td"
    )
}

fn flush_text(out: &mut String, pending: &mut String) {
    let text = collapse_whitespace(&repair_text(&decode_entities(pending)));
    out.push_str(&escape_text(&text));
    pending.clear();
}

/// Reduces a Word table to its structure.
///
/// Table tags keep every attribute except presentation ones (`style`, `class`,
/// `width`, `align`, `valign`). Line breaks become `<br>`. Any other tag is
/// dropped and the text between kept tags is repaired and normalized.
pub fn clean_table(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut pending = String::new();
    let mut last = 0usize;

    for m in TAG.find_iter(markup) {
        pending.push_str(&markup[last..m.start()]);
        last = m.end();

        let tag = m.as_str();
        let name = TAG_NAME
            .captures(tag)
            .and_then(|cap| cap.get(1))
            .map(|n| n.as_str().to_ascii_lowercase())
            .unwrap_or_default();

        if is_structural(&name) {
            flush_text(&mut out, &mut pending);
            out.push_str(&PRESENTATION_ATTR.replace_all(tag, ""));
        } else if name == "br" {
            flush_text(&mut out, &mut pending);
            out.push_str("<br>");
        } else {
            pending.push_str(&detag(tag));
        }
    }
    pending.push_str(&markup[last..]);
    flush_text(&mut out, &mut pending);
    out
}
