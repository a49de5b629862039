#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::lookup::{LookupRequest, LookupResponse};
    use crate::search_input::SearchInput;

    /// Debounce used by app tests; long enough that a slow test never
    /// crosses it by accident
    pub const TEST_DEBOUNCE_MS: u64 = 1000;

    /// App wired to in-memory channels instead of a worker thread
    pub struct TestApp {
        pub app: App,
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    impl TestApp {
        /// Drain every request the app has sent so far
        pub fn sent_queries(&mut self) -> Vec<String> {
            let mut queries = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                queries.push(request.query);
            }
            queries
        }

        pub fn respond(&self, query: &str, names: &[&str]) {
            self.responses
                .send(LookupResponse::Suggestions {
                    query: query.to_string(),
                    names: names.iter().map(|n| n.to_string()).collect(),
                })
                .unwrap();
        }

        pub fn fail(&self, query: &str, message: &str) {
            self.responses
                .send(LookupResponse::Failed {
                    query: query.to_string(),
                    message: message.to_string(),
                })
                .unwrap();
        }

        /// Type text one key at a time, as a user would
        pub fn type_text(&mut self, text: &str) {
            for ch in text.chars() {
                self.app.handle_key_event(key(KeyCode::Char(ch)), Instant::now());
            }
        }

        pub fn press(&mut self, code: KeyCode) {
            self.app.handle_key_event(key(code), Instant::now());
        }

        /// Tick well past the debounce window
        pub fn settle(&mut self) {
            self.app.tick(after_debounce());
        }
    }

    pub fn test_app() -> TestApp {
        let mut config = Config::default();
        config.search.debounce_ms = TEST_DEBOUNCE_MS;

        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = mpsc::channel();

        let mut app = App::new(&config);
        app.set_channels(request_tx, response_rx);

        TestApp {
            app,
            requests,
            responses,
        }
    }

    /// An instant comfortably after any debounce started now
    pub fn after_debounce() -> Instant {
        Instant::now() + Duration::from_millis(TEST_DEBOUNCE_MS * 5)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type text straight into a search input
    pub fn type_text(search: &mut SearchInput, text: &str) {
        for ch in text.chars() {
            search.input(key(KeyCode::Char(ch)));
        }
    }

    /// Draw the app once into an in-memory terminal and return the screen
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }
}
