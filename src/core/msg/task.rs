use serde::{Deserialize, Serialize};

/// In-flight task control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskMsg {
    /// Cancel every in-flight action
    CancelAll,
}
