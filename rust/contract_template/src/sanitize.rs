use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BODY: Regex = Regex::new(r"(?is)<body\b[^>]*>(.*)</body>").unwrap();
    static ref SCRIPT: Regex = Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap();
    static ref STYLE: Regex = Regex::new(r"(?is)<style\b[^>]*>.*?</style>").unwrap();
    // Downlevel-revealed wrappers: <![if !supportLists]>...<![endif]>
    static ref CONDITIONAL: Regex = Regex::new(r"(?is)<!\[if[^\]]*\]>(.*?)<!\[endif\]>").unwrap();
    // Also covers downlevel-hidden blocks (<!--[if gte mso 9]>...<![endif]-->).
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref VENDOR_ATTR: Regex = Regex::new(
        r#"(?i)\s+(?:xmlns(?::\w+)?|[ovwx]:\w+|mso-[\w-]+)\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>"']+)"#
    )
    .unwrap();
}

/// Returns the content between the outermost `<body ...>` and `</body>`.
pub fn body_region(html: &str) -> Option<&str> {
    BODY.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Drops export noise from a body region while preserving everything that can
/// carry document text.
pub fn strip_noise(body: &str) -> String {
    let s = SCRIPT.replace_all(body, "");
    let s = STYLE.replace_all(&s, "");
    let s = CONDITIONAL.replace_all(&s, "${1}");
    let s = COMMENT.replace_all(&s, "");
    let out = VENDOR_ATTR.replace_all(&s, "").into_owned();
    tracing::debug!(
        before = body.len(),
        after = out.len(),
        "stripped scripts, styles, comments and vendor attributes"
    );
    out
}
