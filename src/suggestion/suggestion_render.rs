//! Suggestion item rendering
//!
//! Turns one suggestion into a styled list line, bolding the parts that match
//! the current query. Defined once at module level and fed the dynamic values
//! on every frame.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::highlight::highlight_segments;

const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

fn row_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Build the list line for `suggestion` given the current query
pub fn suggestion_line<'a>(suggestion: &'a str, query: &str, highlighted: bool) -> Line<'a> {
    let base = row_style(highlighted);
    let marker = if highlighted {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    };

    let mut spans = Vec::with_capacity(4);
    spans.push(Span::styled(marker, base));
    spans.extend(
        highlight_segments(suggestion, query)
            .into_iter()
            .map(|segment| {
                let style = if segment.emphasized {
                    base.add_modifier(Modifier::BOLD)
                } else {
                    base
                };
                Span::styled(segment.text, style)
            }),
    );

    Line::from(spans)
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
