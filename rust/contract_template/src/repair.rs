use crate::entities::decode_entities;
use lazy_static::lazy_static;
use regex::Regex;

/// Mis-encoding corrections, tried in this order at every position.
///
/// Order matters: an entry must come before any other entry whose key is a
/// prefix of it (`ï¿½` before anything starting with `ï`, `Ã\u{A0}` grouped with
/// the other two-character `Ã` keys). Replacements are applied in one pass and
/// their output is never re-scanned, so `Ãƒ` yields `Ã` and stays that way.
pub const MOJIBAKE: &[(&str, &str)] = &[
    // U+FFFD read back as windows-1252.
    ("ï¿½", "ã"),
    ("\u{FFFD}", ""),
    // Double-escaped references that survive one decode.
    ("&#45;", "-"),
    ("&nbsp;", " "),
    // UTF-8 lowercase accents read as Latin-1.
    ("Ã§", "ç"),
    ("Ã£", "ã"),
    ("Ã¡", "á"),
    ("Ã¢", "â"),
    ("Ã\u{A0}", "à"),
    ("Ã©", "é"),
    ("Ãª", "ê"),
    ("Ã¨", "è"),
    ("Ã\u{AD}", "í"),
    ("Ã³", "ó"),
    ("Ã´", "ô"),
    ("Ãµ", "õ"),
    ("Ãº", "ú"),
    ("Ã¼", "ü"),
    // Uppercase accents read as windows-1252.
    ("Ã‡", "Ç"),
    ("Ãƒ", "Ã"),
    ("Ã‚", "Â"),
    ("Ã€", "À"),
    ("Ã‰", "É"),
    ("ÃŠ", "Ê"),
    ("Ã“", "Ó"),
    ("Ã”", "Ô"),
    ("Ã•", "Õ"),
    ("Ãš", "Ú"),
    // Two-byte symbols.
    ("Âº", "º"),
    ("Âª", "ª"),
    ("Â§", "§"),
    ("Â°", "°"),
    ("Â\u{A0}", " "),
];

lazy_static! {
    static ref BREAK_TAG: Regex = Regex::new(r"(?i)<br\b[^>]*>").unwrap();
    static ref INLINE_TAG: Regex = Regex::new(
        r"(?i)</?(?:span|font|strong|b|em|i|u|strike|s|sup|sub|small|big|abbr|a|mark|ins|del|o:p|st1:[\w-]+)\b[^>]*>"
    )
    .unwrap();
    static ref ANY_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Applies [`MOJIBAKE`] in a single left-to-right pass.
pub fn repair_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    'scan: while let Some(ch) = rest.chars().next() {
        for (from, to) in MOJIBAKE {
            if let Some(after) = rest.strip_prefix(from) {
                out.push_str(to);
                rest = after;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
                in_ws = true;
            }
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    out.trim().to_string()
}

/// Removes markup while keeping its text.
///
/// Line breaks become newlines, inline formatting tags vanish so that words
/// split across runs stay whole, and every other tag becomes a space.
pub fn detag(markup: &str) -> String {
    let s = BREAK_TAG.replace_all(markup, "\n");
    let s = INLINE_TAG.replace_all(&s, "");
    ANY_TAG.replace_all(&s, " ").into_owned()
}

/// Full text cleanup for a fragment: detag, decode, repair, normalize whitespace.
pub fn clean_text(markup: &str) -> String {
    let text = decode_entities(&detag(markup));
    collapse_whitespace(&repair_text(&text))
}
