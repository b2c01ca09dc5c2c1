use lazy_static::lazy_static;
use regex::Regex;

pub const MARKER_OPEN: &str = r#"<span class="variavel">"#;
pub const MARKER_CLOSE: &str = "</span>";

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{[^{}]*\}\}").unwrap();
}

/// Wraps every `{{token}}` in the highlight marker. Token text is untouched and
/// unbalanced braces are left as they are.
pub fn mark_placeholders(text: &str) -> String {
    PLACEHOLDER
        .replace_all(text, |cap: &regex::Captures| {
            format!("{MARKER_OPEN}{}{MARKER_CLOSE}", &cap[0])
        })
        .into_owned()
}
