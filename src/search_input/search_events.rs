use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle a key aimed at the search input
///
/// List navigation and selection are handled here; everything else edits the
/// query text, and an actual edit restarts the debounce.
pub fn handle_search_key(app: &mut App, key: KeyEvent, now: Instant) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Down => app.search.select_next(),
        KeyCode::Char('n') if ctrl => app.search.select_next(),
        KeyCode::Up => app.search.select_previous(),
        KeyCode::Char('p') if ctrl => app.search.select_previous(),

        KeyCode::Enter | KeyCode::Tab => {
            if app.search.list_visible() {
                app.pick_highlighted();
            }
        }

        _ => {
            if app.search.input(key) {
                app.on_query_changed(now);
            }
        }
    }
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;
