use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::api::{CharacterApi, CharacterSummary, FetchError, GenderFilter, PageQuery, PageResult};
use crate::ui::list::intent::ListIntent;
use crate::ui::list::reducer::ListReducer;
use crate::ui::list::state::{ListState, LoadTicket, PageState};
use crate::ui::mvi::Reducer;

/// Runs one page request, bounded by `limit`.
pub async fn fetch_with_timeout<A: CharacterApi>(
    api: &A,
    query: PageQuery,
    limit: Duration,
) -> Result<PageResult, FetchError> {
    match timeout(limit, api.fetch_page(query)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout {
            duration: limit.as_secs(),
        }),
    }
}

/// Owns the character list and drives its fetches.
///
/// Every operation goes through [`ListReducer`]; this type adds the await
/// on the API and the error reporting around it. The terminal UI drives
/// the same reducer without blocking, see [`crate::ui::app::App`].
pub struct ListController<A> {
    api: Arc<A>,
    state: ListState,
    request_timeout: Duration,
}

impl<A: CharacterApi> ListController<A> {
    pub fn new(api: Arc<A>, request_timeout: Duration) -> Self {
        Self {
            api,
            state: ListState::default(),
            request_timeout,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn characters(&self) -> &[CharacterSummary] {
        &self.state.characters
    }

    pub fn page(&self) -> PageState {
        self.state.page
    }

    /// Loads `page` under `filter`, replacing the held page on success.
    ///
    /// On failure the held page is kept and the error is recorded in the
    /// load phase as well as returned.
    pub async fn load_page(
        &mut self,
        page: u32,
        filter: GenderFilter,
        scroll_to_top: bool,
    ) -> Result<PageResult, FetchError> {
        let Some(ticket) = self.dispatch(ListIntent::Load {
            page,
            filter,
            scroll_to_top,
        }) else {
            return Err(FetchError::InvalidPage { page });
        };
        self.fetch(ticket).await
    }

    /// Switches filter and loads its first page.
    pub async fn set_filter(&mut self, filter: GenderFilter) -> Result<PageResult, FetchError> {
        self.load_page(1, filter, true).await
    }

    /// Loads the following page. `None` when already on the last page.
    pub async fn next_page(&mut self) -> Option<Result<PageResult, FetchError>> {
        self.run(ListIntent::NextPage).await
    }

    /// Loads the preceding page. `None` when already on page 1.
    pub async fn previous_page(&mut self) -> Option<Result<PageResult, FetchError>> {
        self.run(ListIntent::PreviousPage).await
    }

    /// Re-requests the current page and filter.
    pub async fn reload(&mut self) -> Result<PageResult, FetchError> {
        let PageState {
            current_page,
            filter,
            ..
        } = self.state.page;
        self.load_page(current_page, filter, false).await
    }

    /// Dispatches `intent`; if it issued a ticket, fetches and applies it.
    async fn run(&mut self, intent: ListIntent) -> Option<Result<PageResult, FetchError>> {
        let ticket = self.dispatch(intent)?;
        Some(self.fetch(ticket).await)
    }

    async fn fetch(&mut self, ticket: LoadTicket) -> Result<PageResult, FetchError> {
        let result = fetch_with_timeout(self.api.as_ref(), ticket.query(), self.request_timeout).await;
        self.complete(ticket, &result);
        result
    }

    fn dispatch(&mut self, intent: ListIntent) -> Option<LoadTicket> {
        let issued = self.state.issued;
        self.state = ListReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state.issued == issued {
            return None;
        }
        let ticket = self.state.pending().copied();
        if let Some(ticket) = &ticket {
            tracing::debug!(
                token = ticket.token,
                page = ticket.page,
                filter = %ticket.filter,
                "Requesting character page"
            );
        }
        ticket
    }

    fn complete(&mut self, ticket: LoadTicket, result: &Result<PageResult, FetchError>) {
        let outcome = match result {
            Ok(page) => Ok(page.clone()),
            Err(err) => {
                tracing::warn!(
                    token = ticket.token,
                    page = ticket.page,
                    filter = %ticket.filter,
                    error = %err,
                    "Character page request failed"
                );
                Err(err.user_message())
            }
        };
        self.state = ListReducer::reduce(
            std::mem::take(&mut self.state),
            ListIntent::Completed {
                token: ticket.token,
                outcome,
            },
        );
    }
}
