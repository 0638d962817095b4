//! Case-insensitive match highlighting for result snippets.

use regex::RegexBuilder;

/// A run of display text, flagged when it matches the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `text` around every case-insensitive occurrence of `query`.
///
/// The query is matched literally. Absent or empty text yields no segments;
/// an empty query yields the text as a single unmarked segment.
pub fn highlight(text: Option<&str>, query: &str) -> Vec<Segment> {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return Vec::new(),
    };
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return vec![Segment::plain(text)],
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::plain(&text[cursor..found.start()]));
        }
        segments.push(Segment::marked(found.as_str()));
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment]) -> Vec<(String, bool)> {
        segments
            .iter()
            .map(|s| (s.text.clone(), s.matched))
            .collect()
    }

    #[test]
    fn test_single_match() {
        let segments = highlight(Some("Laptop Computer"), "top");
        assert_eq!(
            render(&segments),
            vec![
                ("Lap".to_string(), false),
                ("top".to_string(), true),
                (" Computer".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_multiple_matches() {
        let segments = highlight(Some("Mouse pad for MOUSE"), "mouse");
        let marked: Vec<_> = segments.iter().filter(|s| s.matched).collect();
        assert_eq!(marked.len(), 2);
        assert_eq!(marked[0].text, "Mouse");
        assert_eq!(marked[1].text, "MOUSE");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let segments = highlight(Some("Cable (2m) [USB-C]"), "(2m");
        assert_eq!(segments[1], Segment::marked("(2m"));
        assert!(highlight(Some("a.b"), ".").iter().filter(|s| s.matched).count() == 1);
        assert!(!highlight(Some("price*"), "[").iter().any(|s| s.matched));
    }

    #[test]
    fn test_noop_inputs() {
        assert!(highlight(None, "x").is_empty());
        assert_eq!(highlight(Some("Desk"), ""), vec![Segment::plain("Desk")]);
    }
}
