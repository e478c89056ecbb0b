//! Terminal UI for Strictly Go

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{fs::File, io, io::Stdout, sync::Arc};
use strictly_go::Session;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::GoConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Starting Strictly Go TUI");

    let config = match &cli.config {
        Some(path) => GoConfig::from_file(path)?,
        None => GoConfig::default(),
    };
    let size = config.resolve_size(cli.size)?;

    let mut app = App::new(Session::new(size), config);
    for coord in &cli.play {
        app.select(*coord)?;
        if app.has_notice() {
            warn!(%coord, status = app.status(), "Opening move refused");
        }
    }

    if cli.print {
        println!("{}", app.session().view());
        if let Some(notice) = app.session().notice() {
            println!("{}", notice);
        }
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "Terminal loop failed");
    }
    info!(moves = app.session().history().len(), "Exiting");

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut board = None;
        terminal.draw(|f| board = Some(ui::draw(f, app)))?;
        if let Some(area) = board {
            app.set_board_area(area);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code)?,
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row)?
            }
            _ => {}
        }
    }
    Ok(())
}
