use regex::Regex;

/// Derives the deck id from a filename stem: lowercase, drop everything
/// outside `[a-z0-9\s_-]`, collapse separator runs to a single dash.
pub fn slugify(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || matches!(c, '_' | '-')
        })
        .collect();

    let separator_re = Regex::new(r"[\s_-]+").unwrap();
    let dashed = separator_re.replace_all(&cleaned, "-");
    let trimmed = dashed.trim_matches('-');

    if trimmed.is_empty() {
        "deck".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Human-readable deck title from a filename stem.
pub fn deck_title(value: &str) -> String {
    value.replace('_', " ").trim().to_string()
}
