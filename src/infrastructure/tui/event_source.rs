use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the app runner pulls terminal events from
pub enum EventSource {
    Tui(Arc<Mutex<dyn TuiLike>>),
    Queue(VecDeque<Event>),
}

impl EventSource {
    pub fn tui(tui: Arc<Mutex<dyn TuiLike>>) -> Self {
        EventSource::Tui(tui)
    }

    pub fn queue(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Queue(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Tui(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Queue(queue) => queue.pop_front(),
        }
    }
}
