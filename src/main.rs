use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use tokio::sync::mpsc::unbounded_channel;

use autocountry::app::App;
use autocountry::config::{self, Config};
use autocountry::logging;
use autocountry::lookup::{LookupClient, spawn_worker};

/// Interactive country-name autocomplete
///
/// Prints the picked country to stdout on exit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Quiet period after the last keystroke before a lookup is sent
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Base URL of the countries API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Request timeout
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config
    fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.debounce_ms {
            config.search.debounce_ms = ms;
        }
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.api.timeout_secs = secs;
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init();

    let loaded = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    let mut config = loaded.config;
    args.apply(&mut config);
    config.api.validate()?;

    let client = LookupClient::from_config(&config.api)?;
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let _worker = spawn_worker(client, request_rx, response_tx)?;

    let mut app = App::new(&config);
    app.set_channels(request_tx, response_rx);
    app.config_warning = loaded.warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    // Restore terminal before anything is printed
    let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    result?;

    if let Some(picked) = app.picked() {
        println!("{}", picked);
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        let now = Instant::now();
        app.tick(now);
        app.handle_events(app.poll_timeout(now))?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
