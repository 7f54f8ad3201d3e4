use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::state::ui::Section;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    // Navigation
    Navigate(Section),
    NextSection,
    Explore,

    // Compose form
    ShowCompose,
    CancelCompose,
    SubmitCompose,
    FocusNextField,
    FocusPrevField,
    NextCategory,
    PrevCategory,
    ProcessComposeInput(KeyEvent),
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::ProcessComposeInput(_))
    }
}
