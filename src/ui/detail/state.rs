use crate::api::CharacterSummary;
use crate::ui::mvi::UiState;

/// Detail modal state. Visibility and selection live in one variant so an
/// open modal always has a character to show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Closed,
    Open { character: CharacterSummary },
}

impl UiState for SelectionState {}

impl SelectionState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn selected(&self) -> Option<&CharacterSummary> {
        match self {
            Self::Open { character } => Some(character),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_default() {
        let state = SelectionState::default();
        assert_eq!(state, SelectionState::Closed);
        assert!(!state.is_visible());
        assert!(state.selected().is_none());
    }

    #[test]
    fn open_exposes_character() {
        let character = CharacterSummary {
            id: 2,
            name: "Morty Smith".to_string(),
            ..Default::default()
        };
        let state = SelectionState::Open {
            character: character.clone(),
        };
        assert!(state.is_visible());
        assert_eq!(state.selected(), Some(&character));
    }
}
