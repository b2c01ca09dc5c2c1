use crate::fragment::{Fragment, FragmentKind, FragmentOrder};
use crate::repair::clean_text;
use crate::sanitize::{body_region, strip_noise};
use lazy_static::lazy_static;
use regex::Regex;

/// Inert stand-in left where a table was lifted out. No extraction rule matches it
/// and detagging reduces it to whitespace.
pub const TABLE_MARKER: &str = "<!--table-->";

// Text lengths are counted in chars; a fragment must be strictly longer to survive.
const MIN_HEADING_CHARS: usize = 3;
const MIN_TEXT_CHARS: usize = 1;
const MIN_CONTAINER_CHARS: usize = 20;

lazy_static! {
    static ref TABLE: Regex = Regex::new(r"(?is)<table\b[^>]*>.*?</table>").unwrap();
    static ref HEADING: Regex = Regex::new(r"(?is)<h[1-3]\b[^>]*>(.*?)</h[1-3]>").unwrap();
    static ref PARAGRAPH: Regex = Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").unwrap();
    static ref LIST_ITEM_OPEN: Regex = Regex::new(r"(?i)<li\b[^>]*>").unwrap();
    static ref LIST_TAG: Regex = Regex::new(r"(?i)<(/?)(li|ul|ol)\b[^>]*>").unwrap();
    static ref CONTAINER: Regex = Regex::new(r"(?is)<div\b[^>]*>(.*?)</div>").unwrap();
    static ref BLOCK_CONTENT: Regex = Regex::new(r"(?i)<(?:table|p|h[1-6]|li)\b").unwrap();
    static ref IMAGE: Regex = Regex::new(r"(?i)<img\b").unwrap();
    static ref ENUMERATED: Regex = Regex::new(r"^\d+\.").unwrap();
    static ref SIGNED_MARKER: Regex = Regex::new(r"(?i)^parágrafo").unwrap();
}

/// A fragment together with the offset of its match in the scanned text.
struct Scanned {
    offset: usize,
    fragment: Fragment,
}

impl Scanned {
    fn new(offset: usize, kind: FragmentKind, content: String) -> Self {
        Self {
            offset,
            fragment: Fragment::new(kind, content),
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Lifts every table out of `content`, leaving [`TABLE_MARKER`] in its place.
///
/// Offsets of the returned table fragments point at their markers in the
/// returned text, so they interleave correctly with later passes.
fn extract_tables(content: &str) -> (String, Vec<Scanned>) {
    let mut rest = String::with_capacity(content.len());
    let mut tables = Vec::new();
    let mut last = 0usize;
    for m in TABLE.find_iter(content) {
        rest.push_str(&content[last..m.start()]);
        tables.push(Scanned::new(rest.len(), FragmentKind::Table, m.as_str().to_string()));
        rest.push_str(TABLE_MARKER);
        last = m.end();
    }
    rest.push_str(&content[last..]);
    (rest, tables)
}

fn scan_headings(content: &str) -> Vec<Scanned> {
    HEADING
        .captures_iter(content)
        .filter_map(|cap| {
            let offset = cap.get(0)?.start();
            let text = clean_text(cap.get(1)?.as_str());
            (char_len(&text) > MIN_HEADING_CHARS)
                .then(|| Scanned::new(offset, FragmentKind::Heading, text))
        })
        .collect()
}

/// Paragraph kind by content shape: numbered clause titles are headings and
/// paragraphs opening with "Parágrafo" are signed paragraphs.
pub fn classify_paragraph(text: &str) -> FragmentKind {
    if ENUMERATED.is_match(text) {
        FragmentKind::Heading
    } else if SIGNED_MARKER.is_match(text) {
        FragmentKind::SignedParagraph
    } else {
        FragmentKind::Paragraph
    }
}

fn scan_paragraphs(content: &str) -> Vec<Scanned> {
    PARAGRAPH
        .captures_iter(content)
        .filter_map(|cap| {
            let offset = cap.get(0)?.start();
            let raw = cap.get(1)?.as_str();
            if raw.trim().is_empty() || IMAGE.is_match(raw) {
                return None;
            }
            let text = clean_text(raw);
            (char_len(&text) > MIN_TEXT_CHARS)
                .then(|| Scanned::new(offset, classify_paragraph(&text), text))
        })
        .collect()
}

/// Own text of the item whose open tag ends at `start`.
///
/// The text stops at a nested list. `None` when the item has no `</li>` before
/// its list closes or the next sibling item opens.
fn list_item_text(content: &str, start: usize) -> Option<&str> {
    let mut text_end = None;
    let mut depth = 0usize;
    for tag in LIST_TAG.captures_iter(&content[start..]) {
        let at = start + tag.get(0)?.start();
        let closing = !tag[1].is_empty();
        let is_item = tag[2].eq_ignore_ascii_case("li");
        match (closing, is_item) {
            (true, true) if depth == 0 => return Some(&content[start..text_end.unwrap_or(at)]),
            (false, true) if depth == 0 => return None,
            (true, false) if depth == 0 => return None,
            (true, false) => depth -= 1,
            (false, false) => {
                text_end.get_or_insert(at);
                depth += 1;
            }
            _ => {}
        }
    }
    None
}

fn scan_list_items(content: &str) -> Vec<Scanned> {
    let mut items = Vec::new();
    for open in LIST_ITEM_OPEN.find_iter(content) {
        let Some(raw) = list_item_text(content, open.end()) else {
            continue;
        };
        let text = clean_text(raw);
        if char_len(&text) > MIN_TEXT_CHARS {
            items.push(Scanned::new(open.start(), FragmentKind::ListItem, text));
        }
    }
    items
}

fn scan_containers(content: &str) -> Vec<Scanned> {
    CONTAINER
        .captures_iter(content)
        .filter_map(|cap| {
            let offset = cap.get(0)?.start();
            let inner = cap.get(1)?.as_str();
            if BLOCK_CONTENT.is_match(inner) {
                return None;
            }
            let text = clean_text(inner);
            (char_len(&text) > MIN_CONTAINER_CHARS)
                .then(|| Scanned::new(offset, FragmentKind::Paragraph, text))
        })
        .collect()
}

/// Scans a Word-exported document and returns its classified fragments.
///
/// Returns an empty sequence when the document has no `<body>` region.
pub fn extract_fragments(html: &str, order: FragmentOrder) -> Vec<Fragment> {
    let Some(body) = body_region(html) else {
        tracing::debug!("no body region found");
        return Vec::new();
    };
    let content = strip_noise(body);

    let (content, mut scanned) = extract_tables(&content);
    let tables = scanned.len();
    let headings = scan_headings(&content);
    let paragraphs = scan_paragraphs(&content);
    let list_items = scan_list_items(&content);
    let containers = scan_containers(&content);
    tracing::debug!(
        tables,
        headings = headings.len(),
        paragraphs = paragraphs.len(),
        list_items = list_items.len(),
        containers = containers.len(),
        "scanned body"
    );

    scanned.extend(headings);
    scanned.extend(paragraphs);
    scanned.extend(list_items);
    scanned.extend(containers);
    if order == FragmentOrder::Positional {
        scanned.sort_by_key(|s| s.offset);
    }
    scanned.into_iter().map(|s| s.fragment).collect()
}
