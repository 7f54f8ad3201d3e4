use serde::{Deserialize, Serialize};

pub mod forum;
pub mod notification;
pub mod session;
pub mod system;
pub mod task;
pub mod ui;

use forum::ForumMsg;
use notification::NotificationMsg;
use session::SessionMsg;
use system::SystemMsg;
use task::TaskMsg;
use ui::UiMsg;

/// Domain messages representing application intent.
/// Each variant is delegated to the state slice of the same name by the update function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Session(SessionMsg),
    Forum(ForumMsg),
    Ui(UiMsg),
    Notification(NotificationMsg),
    Task(TaskMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Ui(ui) => ui.is_frequent(),
            _ => false,
        }
    }
}
