//! Paginated, filtered character list.
//!
//! # Architecture
//!
//! - `state.rs` - Collection, page bookkeeping and load phase
//! - `intent.rs` - Navigation, filter changes and fetch completions
//! - `reducer.rs` - Pure transitions; issues a [`LoadTicket`] per request
//! - `controller.rs` - Async facade that runs tickets against a [`CharacterApi`]
//!
//! [`CharacterApi`]: crate::api::CharacterApi

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{fetch_with_timeout, ListController};
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{ListState, LoadPhase, LoadTicket, PageState};
