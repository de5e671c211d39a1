use regex::Regex;
use std::sync::OnceLock;

const MIN_TITLE_CHARS: usize = 4;

fn numbering() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("valid numbering regex"))
}

fn bullet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[•\-*]\s*").expect("valid bullet regex"))
}

/// Echoed prompt headers such as "Your recommendations:"
fn is_echo_header(line: &str) -> bool {
    line.starts_with("Your") && line.ends_with(':')
}

/// Extracts book titles from a plain-text model reply
///
/// Strips list numbering ("1.") and bullets ("•", "-", "*"), drops blank lines,
/// echoed prompt headers and anything too short to be a title, and keeps at
/// most `limit` titles in reply order.
pub fn parse_titles(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_echo_header(line))
        .filter_map(|line| {
            let line = numbering().replace(line, "");
            let line = bullet().replace(&line, "");
            let title = line.trim();
            (title.chars().count() >= MIN_TITLE_CHARS).then(|| title.to_string())
        })
        .take(limit)
        .collect()
}
