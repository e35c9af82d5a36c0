mod app;
mod config;
mod error;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use app::App;
use config::GalleryConfig;
use error::{GalleryError, GalleryResult};

const USAGE: &str = "usage: component-gallery [--config <path>]";

fn parse_args() -> GalleryResult<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| GalleryError::Usage(USAGE.to_string()))?;
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Err(GalleryError::Usage(USAGE.to_string())),
            other => return Err(GalleryError::Usage(format!("unexpected argument {other:?}\n{USAGE}"))),
        }
    }
    Ok(config)
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(level: &str) -> GalleryResult<PathBuf> {
    let dir = GalleryConfig::log_dir()?;
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("component-gallery.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(&directives)
            .map_err(|_| GalleryError::LogFilter(directives.clone()))?,
        Err(_) => EnvFilter::try_new(level).map_err(|_| GalleryError::LogFilter(level.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

fn main() -> Result<()> {
    let config_path = parse_args()?;
    let config = GalleryConfig::load(config_path.as_deref()).context("loading config")?;
    let log_path = init_logging(&config.log_level).context("initializing logging")?;
    tracing::info!(log = %log_path.display(), "component gallery starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        tracing::error!(%err, "component gallery exited with error");
    }
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Wake for input or the next toast/tooltip deadline, whichever is first
        if event::poll(app.poll_timeout())? {
            app.handle_event(event::read()?);
        }
        app.on_tick();

        if app.should_quit {
            tracing::info!("component gallery exiting");
            return Ok(());
        }
    }
}
