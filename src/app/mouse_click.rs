//! Mouse handling
//!
//! Clicking a suggestion selects it; the wheel moves the highlight.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = suggestion_at(app, mouse.column, mouse.row) {
                app.pick_suggestion(index);
            }
        }
        MouseEventKind::ScrollDown if app.search.list_visible() => app.search.select_next(),
        MouseEventKind::ScrollUp if app.search.list_visible() => app.search.select_previous(),
        _ => {}
    }
}

/// Index of the suggestion drawn at the given screen cell
///
/// Only rows inside the list border count.
pub fn suggestion_at(app: &App, column: u16, row: u16) -> Option<usize> {
    if !app.search.list_visible() {
        return None;
    }
    let area = app.list_area?;

    let inside_columns = column > area.x && column + 1 < area.right();
    let inside_rows = row > area.y && row + 1 < area.bottom();
    if !inside_columns || !inside_rows {
        return None;
    }

    let index = app.search.list_state().offset() + usize::from(row - area.y - 1);
    (index < app.search.suggestions().len()).then_some(index)
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
