use crate::api::{GenderFilter, PageResult};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Load an explicit page. Page 0 is ignored.
    Load {
        page: u32,
        filter: GenderFilter,
        scroll_to_top: bool,
    },
    /// Switch filter; always loads page 1.
    SetFilter { filter: GenderFilter },
    NextPage,
    PreviousPage,
    /// Re-request the committed page and filter in place.
    Reload,
    /// A fetch finished. `token` identifies the ticket it answers.
    Completed {
        token: u64,
        outcome: Result<PageResult, String>,
    },
    CursorUp,
    CursorDown,
}

impl Intent for ListIntent {}
