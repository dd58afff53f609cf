use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;

use crate::api::{GenderFilter, HttpCharacterApi};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetch::{run_fetch_worker, COMMAND_BUFFER};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Where browsing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOptions {
    pub page: u32,
    pub filter: GenderFilter,
}

/// Runs the terminal UI until the user quits.
pub fn run(config: Config, start: StartOptions) -> anyhow::Result<()> {
    let api = Arc::new(HttpCharacterApi::new(&config.api).context("Failed to create API client")?);
    tracing::info!(base_url = api.base_url(), "Starting character browser");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let request_timeout = Duration::from_secs(u64::from(config.api.timeout_seconds));
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    runtime.spawn(run_fetch_worker(
        api,
        command_rx,
        events.sender(),
        request_timeout,
    ));

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let mut app = App::new(Some(command_tx));
    app.start(start.page, start.filter);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::PageLoaded { token, outcome }) => app.on_page_loaded(token, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    drop(app);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Character browser stopped");
    Ok(())
}
