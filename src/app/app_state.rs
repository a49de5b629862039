use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::debouncer::Debouncer;
use crate::lookup::{LookupRequest, LookupResponse};
use crate::search_input::SearchInput;

/// Longest the event loop sleeps, so worker responses are drained promptly
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub search: SearchInput,
    /// Debounced lookup, run against `search` when the quiet period ends
    pub debouncer: Debouncer<SearchInput>,
    pub response_rx: Option<Receiver<LookupResponse>>,
    pub should_quit: bool,
    /// Config problem to show in the footer
    pub config_warning: Option<String>,
    /// Where the suggestion list was last drawn, for mouse hit-testing
    pub list_area: Option<Rect>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            search: SearchInput::new(),
            debouncer: Debouncer::from_millis(config.search.debounce_ms),
            response_rx: None,
            should_quit: false,
            config_warning: None,
            list_area: None,
        }
    }

    /// Set the channel handles for communication with the lookup worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.search.set_request_channel(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Suggestion the user picked, printed on exit
    pub fn picked(&self) -> Option<&str> {
        self.search.picked()
    }

    /// Point the debounced action at the current query
    ///
    /// The action captures the query text by value, so it must be refreshed
    /// whenever the text can have changed. Firing always runs whatever was
    /// registered last.
    pub fn sync_fetch_action(&mut self) {
        let query = self.search.query().to_string();
        self.debouncer.set_action(move |search: &mut SearchInput| {
            search.begin_fetch(&query);
        });
    }

    /// React to an edit of the query text
    ///
    /// A blank query clears the list at once and drops any pending lookup;
    /// anything else (re)starts the quiet period.
    pub fn on_query_changed(&mut self, now: Instant) {
        self.sync_fetch_action();

        if self.search.query().trim().is_empty() {
            if self.debouncer.cancel() {
                log::debug!("Query cleared, pending lookup dropped");
            }
            self.search.clear_results();
        } else {
            self.debouncer.trigger_at(now);
        }
    }

    /// Select the suggestion at `index` and stop any pending lookup
    pub fn pick_suggestion(&mut self, index: usize) -> Option<String> {
        let picked = self.search.pick(index)?;
        self.debouncer.cancel();
        self.sync_fetch_action();
        log::debug!("Picked {:?}", picked);
        Some(picked)
    }

    /// Select the highlighted suggestion, if any
    pub fn pick_highlighted(&mut self) -> Option<String> {
        let index = self.search.highlighted_index()?;
        self.pick_suggestion(index)
    }

    /// Advance time: fire a due lookup and apply any finished ones
    pub fn tick(&mut self, now: Instant) {
        self.debouncer.fire_due(now, &mut self.search);
        self.poll_responses();
    }

    /// Apply every response the worker has sent so far, in arrival order
    pub fn poll_responses(&mut self) {
        let Some(rx) = &self.response_rx else {
            return;
        };

        let mut responses = Vec::new();
        let disconnected = loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => break true,
            }
        };

        for response in responses {
            self.search.apply_response(response);
        }

        if disconnected {
            log::warn!("Lookup worker disconnected");
            self.response_rx = None;
        }
    }

    /// How long the event loop may wait for input before the next tick
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.debouncer
            .time_until_fire(now)
            .map_or(TICK_INTERVAL, |until| until.min(TICK_INTERVAL))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
