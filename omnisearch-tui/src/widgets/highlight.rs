//! Styled spans for highlighted matches.

use omnisearch_core::highlight;
use ratatui::{style::Style, text::Span};

pub fn highlighted_spans(
    text: Option<&str>,
    query: &str,
    base: Style,
    mark: Style,
) -> Vec<Span<'static>> {
    highlight(text, query)
        .into_iter()
        .map(|segment| {
            let style = if segment.matched { mark } else { base };
            Span::styled(segment.text, style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_marked_segment_styled() {
        let mark = Style::default().bg(Color::Yellow);
        let spans = highlighted_spans(Some("Laptop Computer"), "top", Style::default(), mark);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "top");
        assert_eq!(spans[1].style, mark);
        assert_eq!(spans[0].style, Style::default());
    }
}
