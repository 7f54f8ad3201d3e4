use crossterm::event::{Event, KeyEvent};
use tui_textarea::TextArea;

use crate::core::state::ui::TextAreaState;
use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextSelection};

/// Compose-form editor backed by tui-textarea. Each call rebuilds a throwaway
/// `TextArea` from the snapshot, feeds it the keys and reads the result back.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore_textarea_from_snapshot(textarea: &mut TextArea<'_>, snapshot: &TextAreaState) {
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            snapshot.cursor_position.line as u16,
            snapshot.cursor_position.column as u16,
        ));
        if let Some(sel) = &snapshot.selection {
            Self::restore_selection(textarea, sel);
        }
    }

    fn extract_cursor_position(textarea: &tui_textarea::TextArea<'_>) -> CursorPosition {
        let (line, column) = textarea.cursor();
        CursorPosition { line, column }
    }

    fn extract_selection(textarea: &tui_textarea::TextArea<'_>) -> Option<TextSelection> {
        textarea.selection_range().map(|((sr, sc), (er, ec))| TextSelection {
            start: CursorPosition { line: sr, column: sc },
            end: CursorPosition { line: er, column: ec },
        })
    }

    fn restore_selection(textarea: &mut TextArea<'_>, selection: &TextSelection) {
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            selection.start.line as u16,
            selection.start.column as u16,
        ));
        textarea.start_selection();
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            selection.end.line as u16,
            selection.end.column as u16,
        ));
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = TextArea::default();
        Self::restore_textarea_from_snapshot(&mut textarea, snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        let content = textarea.lines().join("\n");
        let cursor = Self::extract_cursor_position(&textarea);
        let selection = Self::extract_selection(&textarea);
        TextAreaState::new(content, cursor, selection)
    }
}
