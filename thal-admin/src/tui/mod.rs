//! Terminal front-end

pub mod app;
pub mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use thal_client::{AdminApi, ClientConfig};
use tokio::sync::mpsc;

pub use app::{App, AppEvent, InputMode};

/// How long to wait for a key before redrawing
const TICK: Duration = Duration::from_millis(100);

/// Run the console until the operator quits or logs out
pub async fn run(api: Arc<dyn AdminApi>, assets: ClientConfig) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::channel(app::EVENT_BUFFER);
    let mut app = App::new(api, assets, tx);
    tracing::info!("Press 1/2/3 to switch pages, l for logs, q to quit");
    app.navigate(app.page().key());

    let res = run_app(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Release any preview file still held by an open editor
    app.menu.close_editor();

    res.map_err(Into::into)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    loop {
        app.notices.expire(Instant::now());
        terminal.draw(|f| ui::ui(f, app))?;

        // Apply finished requests (non-blocking)
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }

        // Give spawned requests a turn between polls
        tokio::task::yield_now().await;
    }
}
