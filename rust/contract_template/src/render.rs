use crate::entities::escape_text;
use crate::fragment::{Fragment, FragmentKind};
use crate::placeholder::mark_placeholders;
use crate::table::clean_table;
use crate::template::{closing, preamble, signature_block, DEFAULT_TITLE};

/// Paragraph openings that continue the previous clause and therefore get no
/// first-line indent.
pub const CONNECTORS: &[&str] = &["OU,", "E,", "Pelo presente"];

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    Inside,
}

struct BodyWriter {
    out: String,
    list: ListState,
}

impl BodyWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            list: ListState::Outside,
        }
    }

    fn open_list(&mut self) {
        if self.list == ListState::Outside {
            self.out.push_str("    <ul>\n");
            self.list = ListState::Inside;
        }
    }

    fn close_list(&mut self) {
        if self.list == ListState::Inside {
            self.out.push_str("    </ul>\n");
            self.list = ListState::Outside;
        }
    }

    fn push(&mut self, fragment: &Fragment) {
        if fragment.kind == FragmentKind::ListItem {
            self.open_list();
        } else {
            self.close_list();
        }

        if fragment.kind == FragmentKind::Table {
            self.out.push_str("    ");
            self.out.push_str(&clean_table(&fragment.content));
            self.out.push('\n');
            return;
        }

        let text = mark_placeholders(&escape_text(&fragment.content));
        let line = match fragment.kind {
            FragmentKind::Heading => format!("    <h2>{text}</h2>\n"),
            FragmentKind::SignedParagraph => {
                format!("    <p class=\"paragrafo-unico\">{text}</p>\n")
            }
            FragmentKind::ListItem => format!("        <li>{text}</li>\n"),
            FragmentKind::Paragraph if starts_with_connector(&fragment.content) => {
                format!("    <p class=\"sem-recuo\">{text}</p>\n")
            }
            _ => format!("    <p>{text}</p>\n"),
        };
        self.out.push_str(&line);
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.out
    }
}

fn starts_with_connector(text: &str) -> bool {
    CONNECTORS.iter().any(|c| text.starts_with(c))
}

/// Renders only the body content: one element per fragment, with a single `<ul>`
/// around each run of consecutive list items.
pub fn render_body(fragments: &[Fragment]) -> String {
    let mut writer = BodyWriter::new();
    for fragment in fragments {
        writer.push(fragment);
    }
    writer.finish()
}

/// Renders the complete document: preamble, body, signature block and closing.
pub fn render_document(fragments: &[Fragment], options: &RenderOptions) -> String {
    let body = render_body(fragments);
    tracing::debug!(fragments = fragments.len(), bytes = body.len(), "rendered body");
    let mut out = preamble(&options.title);
    out.push_str(&body);
    out.push_str(signature_block());
    out.push_str(closing());
    out
}
