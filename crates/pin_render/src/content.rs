use scraper::Html;

pub const MISSING_CONTENT: &str = "Konten artikel tidak tersedia.";

/// Turns feed HTML into plain text for the detail page: tags dropped,
/// entities decoded, typographic quotes and dashes folded to ASCII,
/// whitespace collapsed.
pub fn clean_html_content(raw: &str) -> String {
    if raw.trim().is_empty() {
        return MISSING_CONTENT.to_string();
    }

    let fragment = Html::parse_fragment(raw);
    let text: String = fragment.root_element().text().collect();

    let folded: String = text
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{2013}' | '\u{2014}' => '-',
            c => c,
        })
        .collect();

    let cleaned = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        MISSING_CONTENT.to_string()
    } else {
        cleaned
    }
}

/// The first `limit` characters followed by an ellipsis, or `fallback`.
pub fn excerpt(text: Option<&str>, limit: usize, fallback: &str) -> String {
    match text {
        Some(text) if !text.is_empty() => {
            let head: String = text.chars().take(limit).collect();
            format!("{}...", head)
        }
        _ => fallback.to_string(),
    }
}

/// Like [`excerpt`] without the ellipsis, for meta descriptions.
pub fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
