//! Character detail modal.
//!
//! - `state.rs` - Closed, or Open with the selected character
//! - `intent.rs` - Select / Dismiss
//! - `reducer.rs` - Pure transitions
//! - `dialog.rs` - Popup rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_detail_dialog;
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::SelectionState;
