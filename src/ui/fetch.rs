//! Background fetching for the terminal UI.
//!
//! The UI thread never awaits. It sends a [`UiCommand`] per issued ticket;
//! the worker runs each fetch on its own task and reports back through the
//! event channel. Fetches are not serialized, so a newer request is never
//! stuck behind a slow one; ordering is restored by ticket tokens.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::CharacterApi;
use crate::ui::events::AppEvent;
use crate::ui::list::{fetch_with_timeout, LoadTicket};

pub const COMMAND_BUFFER: usize = 16;

#[derive(Debug)]
pub enum UiCommand {
    FetchPage(LoadTicket),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub async fn run_fetch_worker<A: CharacterApi>(
    api: Arc<A>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
    request_timeout: Duration,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::FetchPage(ticket) => {
                let api = Arc::clone(&api);
                let events = events.clone();
                tokio::spawn(async move {
                    let outcome =
                        fetch_with_timeout(api.as_ref(), ticket.query(), request_timeout).await;
                    let event = AppEvent::PageLoaded {
                        token: ticket.token,
                        outcome,
                    };
                    if events.send(event).is_err() {
                        tracing::trace!(token = ticket.token, "Page response dropped (UI gone)");
                    }
                });
            }
        }
    }
    tracing::debug!("Fetch worker stopped");
}
