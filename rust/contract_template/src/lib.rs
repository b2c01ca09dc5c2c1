//! Turns a Word-exported HTML contract into a clean, print-ready template.
//!
//! The work happens in two steps: [`extract_fragments`] scans the export and
//! classifies its content into an ordered list of [`Fragment`]s, and
//! [`render_document`] turns that list into the final document. `{{placeholders}}`
//! pass through both steps untouched apart from a highlight marker.

pub mod entities;
pub mod extract;
pub mod fragment;
pub mod placeholder;
pub mod render;
pub mod repair;
pub mod sanitize;
pub mod table;
pub mod template;

pub use entities::decode_entities;
pub use extract::extract_fragments;
pub use fragment::{Fragment, FragmentKind, FragmentOrder};
pub use placeholder::mark_placeholders;
pub use render::{render_document, RenderOptions};
pub use repair::{clean_text, repair_text};
pub use table::clean_table;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub order: FragmentOrder,
    pub render: RenderOptions,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub html: String,
    pub fragment_count: usize,
}

/// Runs extraction and rendering over one document.
///
/// Never fails: input without a `<body>` renders as the bare template.
pub fn convert(html: &str, options: &ConvertOptions) -> Conversion {
    let fragments = extract_fragments(html, options.order);
    tracing::debug!(count = fragments.len(), order = ?options.order, "extracted fragments");
    Conversion {
        html: render_document(&fragments, &options.render),
        fragment_count: fragments.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_counts_fragments() {
        let html = "<html><body><h1>CONTRATO</h1><p>Texto do contrato.</p></body></html>";
        let conversion = convert(html, &ConvertOptions::default());
        assert_eq!(conversion.fragment_count, 2);
        assert!(conversion.html.contains("<h2>CONTRATO</h2>"));
        assert!(conversion.html.contains("<p>Texto do contrato.</p>"));
    }

    #[test]
    fn convert_without_body_renders_template_only() {
        let conversion = convert("apenas texto", &ConvertOptions::default());
        assert_eq!(conversion.fragment_count, 0);
        assert_eq!(
            conversion.html,
            render_document(&[], &RenderOptions::default())
        );
    }
}
