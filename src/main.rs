use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use spotify_search::auth;
use spotify_search::config::{self, CliArgs, Config};
use spotify_search::controller::AppController;
use spotify_search::logging;
use spotify_search::model::SpotifyClient;
use spotify_search::opener::SystemOpener;
use spotify_search::view::AppView;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = config::load_env_file();
    let config = Config::from(CliArgs::parse());

    let _log_guard = match logging::init_logging(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!(
        market = %config.market,
        limit = config.limit,
        timeout_secs = config.timeout.as_secs(),
        "=== Spotify Search Starting ==="
    );
    if let Some(path) = &env_file {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let http = config
        .http_client()
        .context("failed to build the HTTP client")?;

    // No token, no session: bail out before touching the terminal
    let token = match auth::fetch_token(&http, &config).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "Authentication failed");
            return Err(anyhow::Error::new(e).context("could not obtain a Spotify access token"));
        }
    };

    let spotify = SpotifyClient::new(http, &config);
    let mut controller = AppController::new(spotify, token, Box::new(SystemOpener));
    let view = AppView::default();

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller, &view).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Spotify Search shutting down");
    res.context("terminal UI failed")
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
    view: &AppView,
) -> io::Result<()> {
    let size = terminal.size()?;
    controller.handle_event(Event::Resize(size.width, size.height)).await;

    loop {
        controller.tick();

        terminal.draw(|f| view.render(f, controller.model()))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            controller.handle_event(event::read()?).await;
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
