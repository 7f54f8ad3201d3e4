use std::collections::VecDeque;

use crate::domain::notification::{Toast, ToastKind};

/// Oldest toasts are dropped beyond this many
pub const MAX_QUEUED_TOASTS: usize = 5;

/// Queue of transient toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl NotificationState {
    /// Queue a toast and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
        });
        while self.toasts.len() > MAX_QUEUED_TOASTS {
            self.toasts.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    pub fn toasts(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
