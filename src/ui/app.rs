use crate::api::{FetchError, GenderFilter, PageResult};
use crate::ui::detail::{DetailIntent, DetailReducer, SelectionState};
use crate::ui::fetch::{UiCommand, UiCommandSender};
use crate::ui::list::{ListIntent, ListReducer, ListState, LoadTicket};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc::error::TrySendError;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// All state behind the terminal view.
///
/// Owned by the runtime; the renderer only borrows it. List changes that
/// issue a ticket are forwarded to the fetch worker, and the worker's
/// answers come back through [`App::on_page_loaded`].
pub struct App {
    should_quit: bool,
    list: ListState,
    detail: SelectionState,
    commands: Option<UiCommandSender>,
    tick: u8,
}

impl App {
    pub fn new(commands: Option<UiCommandSender>) -> Self {
        Self {
            should_quit: false,
            list: ListState::default(),
            detail: SelectionState::default(),
            commands,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn detail(&self) -> &SelectionState {
        &self.detail
    }

    pub fn show_detail(&self) -> bool {
        self.detail.is_visible()
    }

    /// Animation counter, advanced while a page is loading.
    pub fn tick(&self) -> u8 {
        self.tick
    }

    /// Initial load.
    pub fn start(&mut self, page: u32, filter: GenderFilter) {
        self.dispatch_list(ListIntent::Load {
            page,
            filter,
            scroll_to_top: true,
        });
    }

    pub fn set_filter(&mut self, filter: GenderFilter) {
        self.dispatch_list(ListIntent::SetFilter { filter });
    }

    /// Advances the picker from the filter currently shown.
    pub fn cycle_filter(&mut self) {
        let next = self.list.shown_filter().next();
        self.set_filter(next);
    }

    pub fn next_page(&mut self) {
        self.dispatch_list(ListIntent::NextPage);
    }

    pub fn previous_page(&mut self) {
        self.dispatch_list(ListIntent::PreviousPage);
    }

    pub fn reload(&mut self) {
        self.dispatch_list(ListIntent::Reload);
    }

    pub fn cursor_up(&mut self) {
        self.dispatch_list(ListIntent::CursorUp);
    }

    pub fn cursor_down(&mut self) {
        self.dispatch_list(ListIntent::CursorDown);
    }

    /// Opens the detail modal for the highlighted row.
    pub fn select_highlighted(&mut self) {
        if let Some(character) = self.list.highlighted().cloned() {
            dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Select { character });
        }
    }

    pub fn dismiss(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Dismiss);
    }

    pub fn on_tick(&mut self) {
        if self.list.is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Applies a finished fetch.
    ///
    /// Failures are logged and leave the held page in place. A successful
    /// answer to the pending request also closes the detail modal, since
    /// the selection belongs to the page being replaced.
    pub fn on_page_loaded(&mut self, token: u64, outcome: Result<PageResult, FetchError>) {
        let current = self.list.pending().map(|ticket| ticket.token) == Some(token);
        if !current {
            tracing::debug!(token, "Discarding stale page response");
            return;
        }

        let outcome = match outcome {
            Ok(page) => Ok(page),
            Err(err) => {
                tracing::warn!(token, error = %err, "Character page request failed");
                Err(err.user_message())
            }
        };
        let loaded = outcome.is_ok();

        dispatch_mvi!(self, list, ListReducer, ListIntent::Completed { token, outcome });
        if loaded {
            self.dismiss();
        }
    }

    fn dispatch_list(&mut self, intent: ListIntent) {
        let issued = self.list.issued;
        dispatch_mvi!(self, list, ListReducer, intent);
        if self.list.issued == issued {
            return;
        }
        if let Some(ticket) = self.list.pending().copied() {
            self.send_fetch(ticket);
        }
    }

    fn send_fetch(&mut self, ticket: LoadTicket) {
        tracing::debug!(
            token = ticket.token,
            page = ticket.page,
            filter = %ticket.filter,
            "Requesting character page"
        );
        let Some(sender) = &self.commands else {
            return;
        };
        let message = match sender.try_send(UiCommand::FetchPage(ticket)) {
            Ok(()) => return,
            Err(TrySendError::Full(_)) => "Too many requests queued, try again",
            Err(TrySendError::Closed(_)) => "Fetch worker unavailable",
        };
        tracing::warn!(token = ticket.token, reason = message, "Page request not sent");
        dispatch_mvi!(
            self,
            list,
            ListReducer,
            ListIntent::Completed {
                token: ticket.token,
                outcome: Err(message.to_string()),
            }
        );
    }
}
