use crate::api::CharacterSummary;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// User picked a row; show its character.
    Select { character: CharacterSummary },
    /// Close the modal and drop the selection.
    Dismiss,
}

impl Intent for DetailIntent {}
