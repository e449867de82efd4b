//! Field extraction helpers for HTML-shaped sources.
//!
//! Upstream profile pages change markup without notice, so each field is
//! extracted by an [`Extractor`]: an ordered list of regex strategies tried
//! in sequence, first match wins. A pattern list can cover old and new
//! markup at once, and each strategy is testable on its own.

use std::str::FromStr;

use regex::Regex;

/// An ordered list of extraction strategies for one field.
pub struct Extractor {
    patterns: Vec<Regex>,
}

impl Extractor {
    /// Compile a pattern list. Patterns are static strings baked into each
    /// adapter; a pattern that fails to compile is a programming error.
    #[must_use]
    pub fn new(patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).expect("extraction pattern should compile"))
            .collect();
        Self { patterns }
    }

    /// First capture group of the first pattern that matches.
    ///
    /// Later patterns are consulted only when every earlier one fails.
    #[must_use]
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.patterns
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Capture and parse into `T`; a capture that fails to parse counts as
    /// no match for that pattern.
    #[must_use]
    pub fn capture_as<T: FromStr>(&self, text: &str) -> Option<T> {
        self.patterns
            .iter()
            .filter_map(|re| re.captures(text))
            .filter_map(|caps| caps.get(1))
            .find_map(|m| m.as_str().trim().parse().ok())
    }
}

/// Isolate an embedded JavaScript array literal (`var name = [...];`) from
/// an HTML document and parse it into JSON values.
///
/// Returns the array elements so callers can validate entry-by-entry and
/// drop malformed entries individually instead of discarding the whole
/// array on one anomaly.
#[must_use]
pub fn embedded_json_array(html: &str, var_name: &str) -> Option<Vec<serde_json::Value>> {
    let pattern = format!(
        r"(?s)var\s+{}\s*=\s*(\[.*?\])\s*;",
        regex::escape(var_name)
    );
    let re = Regex::new(&pattern).expect("embedded array pattern should compile");
    let raw = re.captures(html)?.get(1)?.as_str();

    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(entries)) => Some(entries),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(var_name, error = %e, "embedded array did not parse as JSON");
            None
        }
    }
}

/// Strip HTML tags from a fragment and collapse surrounding whitespace.
///
/// Good enough for table cells; this is not an HTML sanitizer.
#[must_use]
pub fn strip_tags(fragment: &str) -> String {
    let re = Regex::new(r"<[^>]*>").expect("tag pattern should compile");
    re.replace_all(fragment, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_returns_first_matching_pattern() {
        let extractor = Extractor::new(&[
            r#"class="rating-number">(\d+)"#,
            r"Rating[^0-9]*(\d{3,4})",
        ]);

        let new_markup = r#"<div class="rating-number">1823</div>"#;
        assert_eq!(extractor.capture(new_markup), Some("1823"));

        let old_markup = "<td>Rating: 1500</td>";
        assert_eq!(extractor.capture(old_markup), Some("1500"));
    }

    #[test]
    fn earlier_patterns_win_over_later_ones() {
        let extractor = Extractor::new(&[r"primary-(\d+)", r"fallback-(\d+)"]);
        let text = "fallback-2 primary-1";
        assert_eq!(extractor.capture(text), Some("1"));
    }

    #[test]
    fn capture_returns_none_when_nothing_matches() {
        let extractor = Extractor::new(&[r"rating-(\d+)"]);
        assert_eq!(extractor.capture("no numbers here"), None);
    }

    #[test]
    fn capture_as_parses_numeric_fields() {
        let extractor = Extractor::new(&[r"rank\s*#?(\d+)"]);
        assert_eq!(extractor.capture_as::<u32>("rank #42"), Some(42));
        assert_eq!(extractor.capture_as::<u32>("rank #n/a"), None);
    }

    #[test]
    fn embedded_array_is_isolated_and_parsed() {
        let html = r#"
            <script>
                var something_else = 3;
                var all_rating = [{"code":"A","rating":"1500"},{"code":"B","rating":"1602"}];
                var trailing = true;
            </script>
        "#;
        let entries = embedded_json_array(html, "all_rating").expect("array");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["code"], "A");
        assert_eq!(entries[1]["rating"], "1602");
    }

    #[test]
    fn embedded_array_missing_var_returns_none() {
        assert!(embedded_json_array("<html></html>", "all_rating").is_none());
    }

    #[test]
    fn embedded_array_malformed_json_returns_none() {
        let html = "var all_rating = [{broken];";
        assert!(embedded_json_array(html, "all_rating").is_none());
    }

    #[test]
    fn strip_tags_flattens_cells() {
        let cell = r#"<a href="/task"> Problem <b>A</b> </a>"#;
        assert_eq!(strip_tags(cell), "Problem A");
        assert_eq!(strip_tags("plain"), "plain");
    }
}
