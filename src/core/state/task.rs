use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one in-flight asynchronous action
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// What an in-flight task is doing. At most one task per kind runs at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    Connect,
    CreatePost,
    Reward(u64),
}

impl TaskKind {
    pub fn loading_message(&self) -> &'static str {
        match self {
            TaskKind::Connect => "Connecting wallet...",
            TaskKind::CreatePost => "Creating post...",
            TaskKind::Reward(_) => "Processing reward...",
        }
    }

    pub fn busy_message(&self) -> &'static str {
        match self {
            TaskKind::Connect => "Wallet connection already in progress",
            TaskKind::CreatePost => "Post submission already in progress",
            TaskKind::Reward(_) => "Reward already in progress",
        }
    }
}

/// Registry of in-flight tasks.
///
/// Completion messages carry their `TaskId`; a completion whose id is no
/// longer registered (cancelled, or a stale duplicate) must be ignored.
#[derive(Debug, Clone, Default)]
pub struct TaskState {
    next_id: u64,
    in_flight: BTreeMap<TaskId, TaskKind>,
}

impl TaskState {
    /// Register a new task, or `None` when one of the same kind is pending
    pub fn begin(&mut self, kind: TaskKind) -> Option<TaskId> {
        if self.is_pending(kind) {
            return None;
        }
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.in_flight.insert(id, kind);
        Some(id)
    }

    pub fn finish(&mut self, id: TaskId) -> Option<TaskKind> {
        self.in_flight.remove(&id)
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.in_flight.values().any(|k| *k == kind)
    }

    pub fn pending_id(&self, kind: TaskKind) -> Option<TaskId> {
        self.in_flight
            .iter()
            .find(|(_, k)| **k == kind)
            .map(|(id, _)| *id)
    }

    /// Remove and return every in-flight task id
    pub fn drain(&mut self) -> Vec<TaskId> {
        std::mem::take(&mut self.in_flight).into_keys().collect()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    /// Message of the most recently started task
    pub fn loading_message(&self) -> Option<&'static str> {
        self.in_flight
            .values()
            .next_back()
            .map(TaskKind::loading_message)
    }
}
