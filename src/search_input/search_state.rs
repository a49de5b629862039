//! Search input state
//!
//! Owns the query text, the suggestion list, and the loading/error status of
//! the lookup that fills it.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, ListState};
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::{CursorMove, Input, TextArea};

use crate::lookup::{LookupRequest, LookupResponse};

const PLACEHOLDER: &str = "Search...";

/// Shown when the lookup worker cannot be reached
const WORKER_UNAVAILABLE: &str = "Lookup worker unavailable";

/// Where the search input is in its lookup cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Empty query, or a selection was just made
    #[default]
    Idle,
    /// A lookup has been sent and not yet answered
    Pending,
    /// The last answered lookup succeeded (the list may be empty)
    Success,
    /// The last answered lookup failed
    Error,
}

/// Search input state
pub struct SearchInput {
    textarea: TextArea<'static>,
    suggestions: Vec<String>,
    status: SearchStatus,
    error: Option<String>,
    /// Highlighted row and scroll offset of the suggestion list
    list_state: ListState,
    request_tx: Option<UnboundedSender<LookupRequest>>,
    /// Last suggestion the user selected
    picked: Option<String>,
}

/// Single-line text field holding `text`
fn query_textarea(text: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text]);
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchInput {
    pub fn new() -> Self {
        Self {
            textarea: query_textarea(String::new()),
            suggestions: Vec::new(),
            status: SearchStatus::Idle,
            error: None,
            list_state: ListState::default(),
            request_tx: None,
            picked: None,
        }
    }

    /// Connect to the lookup worker
    pub fn set_request_channel(&mut self, request_tx: UnboundedSender<LookupRequest>) {
        self.request_tx = Some(request_tx);
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Pending
    }

    /// Message of the last failed lookup
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn picked(&self) -> Option<&str> {
        self.picked.as_deref()
    }

    /// The list is hidden while loading and when there is nothing to show
    pub fn list_visible(&self) -> bool {
        !self.is_loading() && !self.suggestions.is_empty()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.highlighted_index()
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn list_state(&self) -> &ListState {
        &self.list_state
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Feed an input event to the text field
    ///
    /// Returns true if the query text changed. The field stays single-line:
    /// anything that would split it is joined back together.
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        let changed = self.textarea.input(input);
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().concat();
            self.set_query(&joined);
        }
        changed
    }

    /// Insert pasted text at the cursor, dropping line breaks
    pub fn paste(&mut self, text: &str) -> bool {
        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if cleaned.is_empty() {
            return false;
        }
        self.textarea.insert_str(&cleaned)
    }

    /// Replace the whole query text, leaving the cursor at the end
    pub fn set_query(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.textarea = query_textarea(text);
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Drop the suggestion list and return to idle
    ///
    /// Used when the query is emptied. Does not touch a stored error message;
    /// it is only shown while the status is `Error`.
    pub fn clear_results(&mut self) {
        self.suggestions.clear();
        self.status = SearchStatus::Idle;
        self.list_state.select(None);
    }

    /// Hide a visible suggestion list without touching the query
    ///
    /// Returns true if a list was visible.
    pub fn dismiss(&mut self) -> bool {
        if !self.list_visible() {
            return false;
        }
        self.clear_results();
        true
    }

    /// Send a lookup for `query`
    ///
    /// Blank queries are ignored. On send the status becomes `Pending` and any
    /// previous error is cleared; if the worker is gone the lookup fails
    /// immediately. Returns true if a request was sent.
    pub fn begin_fetch(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        self.status = SearchStatus::Pending;
        self.error = None;

        let request = LookupRequest {
            query: query.to_string(),
        };
        if let Some(tx) = &self.request_tx
            && tx.send(request).is_ok()
        {
            log::debug!("Lookup sent for {:?}", query);
            return true;
        }

        log::warn!("{} (query {:?})", WORKER_UNAVAILABLE, query);
        self.apply_response(LookupResponse::Failed {
            query: query.to_string(),
            message: WORKER_UNAVAILABLE.to_string(),
        });
        false
    }

    /// Apply a lookup response
    ///
    /// Responses are applied in arrival order whatever query they were for, so
    /// a slow answer to an older query can replace a newer one.
    pub fn apply_response(&mut self, response: LookupResponse) {
        match response {
            LookupResponse::Suggestions { query, names } => {
                log::debug!("{} suggestions for {:?}", names.len(), query);
                self.suggestions = names;
                self.status = SearchStatus::Success;
                self.error = None;
                let first = if self.suggestions.is_empty() {
                    None
                } else {
                    Some(0)
                };
                self.list_state = ListState::default().with_selected(first);
            }
            LookupResponse::Failed { query, message } => {
                log::debug!("Lookup for {:?} failed: {}", query, message);
                self.suggestions.clear();
                self.status = SearchStatus::Error;
                self.error = Some(message);
                self.list_state.select(None);
            }
        }
    }

    /// Move the highlight down one row, wrapping to the top
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.suggestions.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the highlight up one row, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        let previous = match self.list_state.selected() {
            Some(0) | None => last,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(previous));
    }

    /// Select the suggestion at `index`
    ///
    /// The query becomes the suggestion, the list is cleared and the status
    /// returns to idle. Returns the picked value, or `None` if `index` is out
    /// of range.
    pub fn pick(&mut self, index: usize) -> Option<String> {
        let value = self.suggestions.get(index)?.clone();
        self.set_query(&value);
        self.clear_results();
        self.picked = Some(value.clone());
        Some(value)
    }

    /// Select the highlighted suggestion, if any
    pub fn pick_highlighted(&mut self) -> Option<String> {
        let index = self.highlighted_index()?;
        self.pick(index)
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
