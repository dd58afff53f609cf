use crate::api::{CharacterSummary, GenderFilter, PageQuery};
use crate::ui::mvi::UiState;

/// Committed pagination position.
///
/// Only replaced by a successful load, so it always describes the
/// characters currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub filter: GenderFilter,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            filter: GenderFilter::All,
        }
    }
}

impl PageState {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// One issued page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub token: u64,
    pub page: u32,
    pub filter: GenderFilter,
    pub scroll_to_top: bool,
}

impl LoadTicket {
    pub fn query(&self) -> PageQuery {
        PageQuery::new(self.page, self.filter)
    }
}

/// Idle → Loading → Loaded | Errored, and back to Loading on every request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading(LoadTicket),
    Loaded,
    /// Last request failed; the previous page is still held.
    Errored { message: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub characters: Vec<CharacterSummary>,
    pub page: PageState,
    pub phase: LoadPhase,
    /// Highlighted row.
    pub cursor: usize,
    /// Token of the most recently issued ticket (0 = none yet).
    pub issued: u64,
}

impl UiState for ListState {}

impl ListState {
    /// Ticket awaiting its response, if any.
    pub fn pending(&self) -> Option<&LoadTicket> {
        match &self.phase {
            LoadPhase::Loading(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Errored { message } => Some(message),
            _ => None,
        }
    }

    /// Filter the view should display: the requested one while loading.
    pub fn shown_filter(&self) -> GenderFilter {
        self.pending().map_or(self.page.filter, |ticket| ticket.filter)
    }

    pub fn highlighted(&self) -> Option<&CharacterSummary> {
        self.characters.get(self.cursor)
    }
}
