//! Roster Console
//!
//! Run: cargo run -p roster-console
//! (server address from `ROSTER_API_URL`, default http://localhost:3431)

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use roster_client::ClientConfig;
use roster_console::{Action, App, EmployeeBackend, logger, ui::ui};

const API_URL_VAR: &str = "ROSTER_API_URL";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    logger::init_file_logger();

    let config = ClientConfig::from_env_var(API_URL_VAR);
    let client = config
        .build_http_client()
        .context("Failed to build HTTP client")?;
    tracing::info!(base_url = %client.base_url(), "Roster console starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(client.base_url());
    let res = run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Console terminated with an error")
}

async fn run_app<B: EmployeeBackend + ?Sized>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    backend: &B,
) -> io::Result<()> {
    // Initial fetch, with the loading indicator drawn first
    terminal.draw(|f| ui(f, app))?;
    app.refresh(backend).await;

    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }

        match app.handle_key(key) {
            Action::Quit => return Ok(()),
            action if action.needs_backend() => {
                app.loading = true;
                terminal.draw(|f| ui(f, app))?;
                app.perform(action, backend).await;
            }
            _ => {}
        }
    }
}
