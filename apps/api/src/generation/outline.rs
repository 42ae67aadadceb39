use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a level-two markdown heading: exactly `##` followed by whitespace.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+?)\s*$").unwrap());

/// Returned when the text carries no headings at all.
pub const DEFAULT_OUTLINE: [&str; 3] = ["Introduction", "Main Content", "Conclusion"];

/// Collects `## ` headings in document order, or the default outline if there are none.
pub fn extract_outline(text: &str) -> Vec<String> {
    let headings: Vec<String> = text
        .lines()
        .filter_map(|line| HEADING_RE.captures(line.trim_end()))
        .map(|caps| caps[1].to_string())
        .collect();

    if headings.is_empty() {
        DEFAULT_OUTLINE.iter().map(|h| h.to_string()).collect()
    } else {
        headings
    }
}
