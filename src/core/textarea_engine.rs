use crossterm::event::{KeyCode, KeyEvent};

use crate::core::state::ui::TextAreaState;

/// Engine interface that applies a sequence of key events to a text field snapshot
/// and returns the resulting snapshot. Implementations must be deterministic and
/// free of external side effects so they can run inside `update`.
pub trait TextAreaEngine {
    /// Apply keys to the given snapshot and return the updated snapshot.
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;

    /// Same as `apply_keys`, but line breaks are dropped before editing.
    fn apply_keys_single_line(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let keys: Vec<KeyEvent> = keys
            .iter()
            .filter(|k| k.code != KeyCode::Enter)
            .copied()
            .collect();
        self.apply_keys(snapshot, &keys)
    }
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }
}
