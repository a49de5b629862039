//! Search input rendering
//!
//! The text field, the loading/error indicator under it, and the suggestion
//! list that drops down over the body.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::search_input::SearchStatus;
use crate::suggestion::suggestion_line;
use crate::widgets::popup;

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "No countries found";

// Suggestion list display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MIN_LIST_WIDTH: u16 = 24;
const LIST_BORDER: u16 = 2;
const LIST_MARKER_WIDTH: u16 = 2;
const LIST_PADDING: u16 = 1;
const LIST_OFFSET_X: u16 = 1;

/// Render the query input field
pub fn render_field(app: &App, frame: &mut Frame, area: Rect) {
    frame.render_widget(app.search.textarea(), area);
}

/// Render the loading or error indicator
pub fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let line = if app.search.is_loading() {
        Line::from(Span::styled(
            format!(" {}", LOADING_TEXT),
            Style::default().fg(Color::Yellow),
        ))
    } else if app.search.status() == SearchStatus::Error {
        Line::from(Span::styled(
            format!(" {}", ERROR_TEXT),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the suggestion list just below `anchor`, kept inside `bounds`
///
/// Returns the area the list occupies, or `None` if nothing was drawn.
pub fn render_list(
    app: &mut App,
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
) -> Option<Rect> {
    if !app.search.list_visible() {
        return None;
    }

    let suggestions = app.search.suggestions();
    let query = app.search.query();
    let highlighted = app.search.highlighted_index();

    let widest = suggestions
        .iter()
        .map(|s| s.as_str().width())
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16;
    let list_width = widest
        .saturating_add(LIST_MARKER_WIDTH + LIST_BORDER + LIST_PADDING)
        .max(MIN_LIST_WIDTH);
    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS) as u16;
    let list_height = visible_count + LIST_BORDER;

    let area = popup::dropdown_below_anchor(anchor, bounds, list_width, list_height, LIST_OFFSET_X);
    if area.height <= LIST_BORDER || area.width <= LIST_BORDER {
        return None;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            ListItem::new(suggestion_line(suggestion, query, Some(i) == highlighted))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" Countries ({}) ", suggestions.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    // Render against a copy so the list items can keep borrowing the state
    let mut list_state = app.search.list_state().clone();

    popup::clear_area(frame, area);
    frame.render_stateful_widget(list, area, &mut list_state);

    *app.search.list_state_mut() = list_state;
    Some(area)
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
