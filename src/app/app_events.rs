use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use super::mouse_click;
use crate::search_input::search_events;

impl App {
    /// Wait up to `timeout` for a terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            let event = event::read()?;
            self.handle_event(event, Instant::now());
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => mouse_click::handle_mouse(self, mouse),
            Event::Paste(text) => {
                if self.search.paste(&text) {
                    self.on_query_changed(now);
                }
            }
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        search_events::handle_search_key(self, key, now);
    }

    /// Handle keys that work regardless of list state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Esc: close the list first, quit when there is nothing to close
        if key.code == KeyCode::Esc {
            if !self.search.dismiss() {
                self.should_quit = true;
            }
            return true;
        }

        false
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
