use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::core::{cmd::Cmd, msg::ui::UiMsg};
use crate::domain::{
    forum::{Category, PostDraft},
    ui::{CursorPosition, TextSelection},
};

/// Snapshot of one editable text field.
/// Kept outside of any widget so the text area can be rebuilt on every key press.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Top-level sections reachable from the navigation bar
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Section {
    #[default]
    Home,
    Forum,
    Profile,
}

impl Section {
    pub fn next(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let index = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

/// Field of the compose form that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Title,
    Body,
    Category,
}

impl ComposeField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Body,
            Self::Body => Self::Category,
            Self::Category => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Category,
            Self::Body => Self::Title,
            Self::Category => Self::Body,
        }
    }
}

/// The create-post modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposeForm {
    pub title: TextAreaState,
    pub body: TextAreaState,
    pub category: Category,
    pub focus: ComposeField,
}

impl ComposeForm {
    pub fn to_draft(&self) -> PostDraft {
        PostDraft::new(
            self.title.content.clone(),
            self.body.content.clone(),
            self.category,
        )
    }

    /// Text field under focus; `None` when the category selector is focused
    pub fn focused_text(&self) -> Option<&TextAreaState> {
        match self.focus {
            ComposeField::Title => Some(&self.title),
            ComposeField::Body => Some(&self.body),
            ComposeField::Category => None,
        }
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut TextAreaState> {
        match self.focus {
            ComposeField::Title => Some(&mut self.title),
            ComposeField::Body => Some(&mut self.body),
            ComposeField::Category => None,
        }
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub section: Section,
    pub compose: Option<ComposeForm>,
}

impl UiState {
    pub fn is_composing(&self) -> bool {
        self.compose.is_some()
    }

    /// UI-specific update function. Text input and submission need other
    /// slices and are coordinated by `core::update`.
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::Navigate(section) => self.section = section,
            UiMsg::NextSection => self.section = self.section.next(),
            UiMsg::Explore => self.section = Section::Forum,
            UiMsg::ShowCompose => self.compose = Some(ComposeForm::default()),
            UiMsg::CancelCompose => self.compose = None,
            UiMsg::FocusNextField => {
                if let Some(form) = &mut self.compose {
                    form.focus = form.focus.next();
                }
            }
            UiMsg::FocusPrevField => {
                if let Some(form) = &mut self.compose {
                    form.focus = form.focus.prev();
                }
            }
            UiMsg::NextCategory => {
                if let Some(form) = &mut self.compose {
                    form.category = form.category.next();
                }
            }
            UiMsg::PrevCategory => {
                if let Some(form) = &mut self.compose {
                    form.category = form.category.prev();
                }
            }
            UiMsg::SubmitCompose | UiMsg::ProcessComposeInput(_) => {
                log::warn!("UiState::update received coordinated message {msg:?}");
            }
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_navigation() {
        let mut ui = UiState::default();
        assert_eq!(ui.section, Section::Home);
        ui.update(UiMsg::Explore);
        assert_eq!(ui.section, Section::Forum);
        ui.update(UiMsg::NextSection);
        assert_eq!(ui.section, Section::Profile);
        ui.update(UiMsg::NextSection);
        assert_eq!(ui.section, Section::Home);
        ui.update(UiMsg::Navigate(Section::Profile));
        assert_eq!(ui.section, Section::Profile);
    }

    #[test]
    fn test_compose_lifecycle() {
        let mut ui = UiState::default();
        ui.update(UiMsg::ShowCompose);
        assert!(ui.is_composing());

        ui.update(UiMsg::FocusNextField);
        ui.update(UiMsg::FocusNextField);
        assert_eq!(ui.compose.as_ref().map(|f| f.focus), Some(ComposeField::Category));
        assert!(ui.compose.as_ref().and_then(|f| f.focused_text()).is_none());

        ui.update(UiMsg::NextCategory);
        assert_eq!(
            ui.compose.as_ref().map(|f| f.category),
            Some(Category::Technology)
        );
        ui.update(UiMsg::FocusPrevField);
        assert_eq!(ui.compose.as_ref().map(|f| f.focus), Some(ComposeField::Body));

        ui.update(UiMsg::CancelCompose);
        assert!(!ui.is_composing());
    }

    #[test]
    fn test_to_draft() {
        let form = ComposeForm {
            title: TextAreaState::new("Title".into(), CursorPosition::default(), None),
            body: TextAreaState::new("Body".into(), CursorPosition::default(), None),
            category: Category::Community,
            focus: ComposeField::Title,
        };
        assert_eq!(
            form.to_draft(),
            PostDraft::new("Title", "Body", Category::Community)
        );
    }
}
