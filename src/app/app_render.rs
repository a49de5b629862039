use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::search_input::search_render;

const TITLE: &str = "Auto-Complete";
const KEY_HINTS: &str = " ↑/↓ move · Enter select · Esc close · Ctrl+C quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // The debounced action is refreshed every frame
        self.sync_fetch_action();

        let layout = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Loading / error indicator
            Constraint::Min(0),    // Body the list drops down over
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

        render_title(frame, layout[0]);
        search_render::render_field(self, frame, layout[1]);
        search_render::render_status(self, frame, layout[2]);
        self.render_footer(frame, layout[4]);

        // Drawn last so it sits over the indicator row and the body
        let list_bounds = layout[2].union(layout[3]);
        self.list_area = search_render::render_list(self, frame, layout[1], list_bounds);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.config_warning {
            Some(warning) => Line::from(Span::styled(
                format!(" ⚠ {}", warning),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                KEY_HINTS,
                Style::default().fg(Color::DarkGray),
            )),
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", TITLE),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
