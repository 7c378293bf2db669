use std::{
    env,
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::Mutex,
    time::Duration
};

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arxivsearch::{
    browser::SystemBrowser,
    config::SearchConfig,
    fetch::HttpFeedSource,
    search::run_search,
    ui::{Action, App}
};

const DEFAULT_LOG_FILE: &str = "arxivsearch.log";

fn main() -> anyhow::Result<()> {
    let config = SearchConfig::from_env().context("invalid configuration")?;
    init_logging()?;
    let source = HttpFeedSource::with_defaults().context("failed to build HTTP client")?;
    info!(api_url = %config.api_url, max_results = config.max_results, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app, &source);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "exiting on error");
    }
    res
}

// the terminal belongs to the form, so logs go to a file.
fn init_logging() -> anyhow::Result<()> {
    let path = env::var("LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join(DEFAULT_LOG_FILE));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: &HttpFeedSource
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match app.handle_key(key.code, key.modifiers) {
            Action::Quit => return Ok(()),
            Action::Submit => {
                app.begin_search();
                terminal.draw(|f| app.render(f))?;

                let request = app.request();
                let result = run_search(app.config(), &request, source, &SystemBrowser);
                if let Err(e) = &result {
                    error!(error = %e, "search failed");
                }
                app.finish_search(result);

                // keys pressed while blocked are dropped
                while event::poll(Duration::ZERO)? {
                    event::read()?;
                }
            }
            Action::None => {}
        }
    }
}
