use crate::api::PageResult;
use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::{ListState, LoadPhase, LoadTicket, PageState};
use crate::ui::mvi::Reducer;

/// Reducer for the character list.
///
/// Requests never touch the held page; they only move the phase to
/// `Loading` with a fresh ticket. A completion is applied only when it
/// answers the pending ticket, so a slower, superseded response can never
/// overwrite a newer one.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Load {
                page,
                filter,
                scroll_to_top,
            } => {
                if page == 0 {
                    return state;
                }
                let token = state.issued + 1;
                ListState {
                    phase: LoadPhase::Loading(LoadTicket {
                        token,
                        page,
                        filter,
                        scroll_to_top,
                    }),
                    issued: token,
                    ..state
                }
            }

            ListIntent::SetFilter { filter } => Self::reduce(
                state,
                ListIntent::Load {
                    page: 1,
                    filter,
                    scroll_to_top: true,
                },
            ),

            ListIntent::NextPage => {
                let (current_page, filter) = match pending_filter_change(&state) {
                    Some(ticket) => (ticket.page, ticket.filter),
                    None if state.page.has_next() => (state.page.current_page, state.page.filter),
                    None => return state,
                };
                Self::reduce(
                    state,
                    ListIntent::Load {
                        page: current_page + 1,
                        filter,
                        scroll_to_top: true,
                    },
                )
            }

            ListIntent::PreviousPage => {
                let (current_page, filter) = match pending_filter_change(&state) {
                    Some(ticket) => (ticket.page, ticket.filter),
                    None => (state.page.current_page, state.page.filter),
                };
                if current_page <= 1 {
                    return state;
                }
                Self::reduce(
                    state,
                    ListIntent::Load {
                        page: current_page - 1,
                        filter,
                        scroll_to_top: true,
                    },
                )
            }

            ListIntent::Reload => {
                let PageState {
                    current_page,
                    filter,
                    ..
                } = state.page;
                Self::reduce(
                    state,
                    ListIntent::Load {
                        page: current_page,
                        filter,
                        scroll_to_top: false,
                    },
                )
            }

            ListIntent::Completed { token, outcome } => {
                let Some(ticket) = state.pending().copied() else {
                    return state;
                };
                if ticket.token != token {
                    return state;
                }
                match outcome {
                    Ok(result) => apply_page(state, ticket, result),
                    Err(message) => ListState {
                        phase: LoadPhase::Errored { message },
                        ..state
                    },
                }
            }

            ListIntent::CursorUp => ListState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },

            ListIntent::CursorDown => {
                let last = state.characters.len().saturating_sub(1);
                ListState {
                    cursor: (state.cursor + 1).min(last),
                    ..state
                }
            }
        }
    }
}

/// Pending request for a filter other than the committed one.
///
/// Until it lands, paging steps from that request's page so the new
/// filter is carried along.
fn pending_filter_change(state: &ListState) -> Option<LoadTicket> {
    state
        .pending()
        .filter(|ticket| ticket.filter != state.page.filter)
        .copied()
}

fn apply_page(state: ListState, ticket: LoadTicket, result: PageResult) -> ListState {
    let PageResult {
        characters,
        total_pages,
    } = result;

    let cursor = if ticket.scroll_to_top {
        0
    } else {
        state.cursor.min(characters.len().saturating_sub(1))
    };

    ListState {
        characters,
        page: PageState {
            current_page: ticket.page,
            total_pages,
            filter: ticket.filter,
        },
        phase: LoadPhase::Loaded,
        cursor,
        issued: state.issued,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CharacterSummary, GenderFilter};

    fn character(id: u64, name: &str) -> CharacterSummary {
        CharacterSummary {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn loaded(current_page: u32, total_pages: u32, rows: usize) -> ListState {
        ListState {
            characters: (0..rows as u64).map(|id| character(id, "row")).collect(),
            page: PageState {
                current_page,
                total_pages,
                filter: GenderFilter::All,
            },
            phase: LoadPhase::Loaded,
            cursor: 0,
            issued: 3,
        }
    }

    fn pending(state: &ListState) -> LoadTicket {
        *state.pending().expect("expected a pending ticket")
    }

    #[test]
    fn load_issues_increasing_tokens() {
        let state = ListReducer::reduce(
            ListState::default(),
            ListIntent::Load {
                page: 1,
                filter: GenderFilter::All,
                scroll_to_top: true,
            },
        );
        assert_eq!(pending(&state).token, 1);

        let state = ListReducer::reduce(state, ListIntent::Reload);
        assert_eq!(pending(&state).token, 2);
        assert_eq!(state.issued, 2);
    }

    #[test]
    fn load_page_zero_is_ignored() {
        let before = loaded(2, 5, 3);
        let after = ListReducer::reduce(
            before.clone(),
            ListIntent::Load {
                page: 0,
                filter: GenderFilter::Male,
                scroll_to_top: true,
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn set_filter_requests_first_page() {
        let state = ListReducer::reduce(
            loaded(4, 5, 3),
            ListIntent::SetFilter {
                filter: GenderFilter::Female,
            },
        );
        let ticket = pending(&state);
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.filter, GenderFilter::Female);
        assert!(ticket.scroll_to_top);
        // Committed page is untouched until the response lands.
        assert_eq!(state.page.current_page, 4);
    }

    #[test]
    fn next_and_previous_respect_bounds() {
        let at_last = loaded(5, 5, 3);
        assert_eq!(ListReducer::reduce(at_last.clone(), ListIntent::NextPage), at_last);

        let at_first = loaded(1, 5, 3);
        assert_eq!(
            ListReducer::reduce(at_first.clone(), ListIntent::PreviousPage),
            at_first
        );

        let next = ListReducer::reduce(at_first, ListIntent::NextPage);
        assert_eq!(pending(&next).page, 2);

        let previous = ListReducer::reduce(at_last, ListIntent::PreviousPage);
        assert_eq!(pending(&previous).page, 4);
    }

    #[test]
    fn reload_keeps_scroll_position() {
        let state = ListReducer::reduce(loaded(3, 5, 3), ListIntent::Reload);
        let ticket = pending(&state);
        assert_eq!(ticket.page, 3);
        assert!(!ticket.scroll_to_top);
    }

    #[test]
    fn completion_replaces_page_and_resets_cursor() {
        let mut state = loaded(1, 5, 10);
        state.cursor = 7;
        let state = ListReducer::reduce(state, ListIntent::NextPage);
        let token = pending(&state).token;

        let state = ListReducer::reduce(
            state,
            ListIntent::Completed {
                token,
                outcome: Ok(PageResult {
                    characters: vec![character(21, "Summer Smith")],
                    total_pages: 5,
                }),
            },
        );

        assert_eq!(state.phase, LoadPhase::Loaded);
        assert_eq!(state.page.current_page, 2);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.characters, vec![character(21, "Summer Smith")]);
    }

    #[test]
    fn reload_completion_clamps_cursor() {
        let mut state = loaded(2, 5, 10);
        state.cursor = 9;
        let state = ListReducer::reduce(state, ListIntent::Reload);
        let token = pending(&state).token;
        let state = ListReducer::reduce(
            state,
            ListIntent::Completed {
                token,
                outcome: Ok(PageResult {
                    characters: vec![character(1, "a"), character(2, "b")],
                    total_pages: 5,
                }),
            },
        );
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn failure_keeps_previous_page() {
        let before = loaded(2, 5, 4);
        let state = ListReducer::reduce(before.clone(), ListIntent::NextPage);
        let token = pending(&state).token;
        let state = ListReducer::reduce(
            state,
            ListIntent::Completed {
                token,
                outcome: Err("boom".to_string()),
            },
        );

        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.characters, before.characters);
        assert_eq!(state.page, before.page);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let state = ListReducer::reduce(
            loaded(1, 5, 2),
            ListIntent::SetFilter {
                filter: GenderFilter::Male,
            },
        );
        let stale = pending(&state).token;
        let state = ListReducer::reduce(
            state,
            ListIntent::SetFilter {
                filter: GenderFilter::Female,
            },
        );
        let fresh = pending(&state).token;

        let after_stale = ListReducer::reduce(
            state.clone(),
            ListIntent::Completed {
                token: stale,
                outcome: Ok(PageResult {
                    characters: vec![character(1, "Rick Sanchez")],
                    total_pages: 9,
                }),
            },
        );
        assert_eq!(after_stale, state);

        let after_fresh = ListReducer::reduce(
            after_stale,
            ListIntent::Completed {
                token: fresh,
                outcome: Ok(PageResult {
                    characters: vec![character(4, "Beth Smith")],
                    total_pages: 3,
                }),
            },
        );
        assert_eq!(after_fresh.page.filter, GenderFilter::Female);
        assert_eq!(after_fresh.page.total_pages, 3);
    }

    #[test]
    fn completion_without_pending_request_is_ignored() {
        let state = loaded(1, 5, 2);
        let after = ListReducer::reduce(
            state.clone(),
            ListIntent::Completed {
                token: state.issued,
                outcome: Err("late".to_string()),
            },
        );
        assert_eq!(after, state);
    }

    #[test]
    fn paging_during_filter_change_keeps_new_filter() {
        let state = ListReducer::reduce(
            loaded(3, 5, 2),
            ListIntent::SetFilter {
                filter: GenderFilter::Female,
            },
        );

        // Still on page 1 of the new filter, nothing before it.
        let unchanged = ListReducer::reduce(state.clone(), ListIntent::PreviousPage);
        assert_eq!(unchanged, state);

        let state = ListReducer::reduce(state, ListIntent::NextPage);
        let ticket = pending(&state);
        assert_eq!(ticket.page, 2);
        assert_eq!(ticket.filter, GenderFilter::Female);
        assert_eq!(state.shown_filter(), GenderFilter::Female);

        let state = ListReducer::reduce(state, ListIntent::PreviousPage);
        let ticket = pending(&state);
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.filter, GenderFilter::Female);
    }

    #[test]
    fn paging_while_same_filter_loads_steps_from_committed_page() {
        let state = ListReducer::reduce(loaded(2, 5, 2), ListIntent::NextPage);
        let state = ListReducer::reduce(state, ListIntent::NextPage);
        assert_eq!(pending(&state).page, 3);
        assert_eq!(pending(&state).filter, GenderFilter::All);
    }

    #[test]
    fn page_past_reported_total_keeps_requested_number() {
        let state = ListReducer::reduce(
            ListState::default(),
            ListIntent::Load {
                page: 9,
                filter: GenderFilter::All,
                scroll_to_top: true,
            },
        );
        let token = pending(&state).token;
        let state = ListReducer::reduce(
            state,
            ListIntent::Completed {
                token,
                outcome: Ok(PageResult {
                    characters: vec![character(90, "Mr. Poopybutthole")],
                    total_pages: 4,
                }),
            },
        );

        // Rows and page number stay paired; only going back is possible.
        assert_eq!(state.page.current_page, 9);
        assert_eq!(state.page.total_pages, 4);
        assert_eq!(state.characters, vec![character(90, "Mr. Poopybutthole")]);
        assert!(!state.page.has_next());
        assert!(state.page.has_previous());
    }

    #[test]
    fn cursor_stays_within_rows() {
        let state = loaded(1, 1, 2);
        let state = ListReducer::reduce(state, ListIntent::CursorUp);
        assert_eq!(state.cursor, 0);
        let state = ListReducer::reduce(state, ListIntent::CursorDown);
        let state = ListReducer::reduce(state, ListIntent::CursorDown);
        assert_eq!(state.cursor, 1);

        let empty = ListReducer::reduce(ListState::default(), ListIntent::CursorDown);
        assert_eq!(empty.cursor, 0);
    }
}
