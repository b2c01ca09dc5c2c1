use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    Table,
    Heading,
    SignedParagraph,
    ListItem,
    Paragraph,
}

impl FragmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FragmentKind::Table => "table",
            FragmentKind::Heading => "heading",
            FragmentKind::SignedParagraph => "signed-paragraph",
            FragmentKind::ListItem => "list-item",
            FragmentKind::Paragraph => "paragraph",
        }
    }
}

/// One classified piece of document content.
///
/// `content` is plain, whitespace-normalized text for every kind except
/// [`FragmentKind::Table`], where it holds the raw table markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub content: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// How the extracted sequence is ordered across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FragmentOrder {
    /// Tables first, then every heading, every paragraph, every list item and
    /// every container, each group in source order.
    #[default]
    Legacy,
    /// Every fragment at the source position of its match.
    Positional,
}
