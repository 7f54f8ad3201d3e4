use serde::{Deserialize, Serialize};

use crate::domain::notification::ToastKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationMsg {
    Push { kind: ToastKind, message: String },
    Dismiss(u64),
}
