// String cleanup applied to scraped quote text and author names

/// U+2015 HORIZONTAL BAR, placed between a quote and its attribution.
pub const SEPARATOR: char = '\u{2015}';

/// Joins fragments and reduces them to the bare quote text.
///
/// Only the text before the first separator is kept, so a quote that itself
/// contains U+2015 comes out truncated.
pub fn normalize_quote(fragments: &[String]) -> String {
    let joined = fragments.join(" ");
    let quote = strip_attribution(&joined);
    collapse_whitespace(&strip_non_ascii(quote))
}

pub fn normalize_author(raw: &str) -> String {
    strip_non_ascii(raw.trim())
}

pub fn strip_attribution(text: &str) -> &str {
    text.split(SEPARATOR).next().unwrap_or_default()
}

/// Drops every character outside ASCII. Curly quotes and accented letters go with it.
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
