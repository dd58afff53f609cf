use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::SelectionState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = SelectionState;
    type Intent = DetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Select { character } => SelectionState::Open { character },
            DetailIntent::Dismiss => SelectionState::Closed,
        }
    }
}
