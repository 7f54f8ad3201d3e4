use serde::{Deserialize, Serialize};

use crate::{core::state::task::TaskId, domain::session::Session};

/// Wallet session messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionMsg {
    /// Connect when disconnected, disconnect when connected
    ToggleWallet,
    Connect,
    Disconnect,
    RequestAccountDetails,

    // Results delivered by the command executor
    Restored(Option<Session>),
    Connected {
        task: TaskId,
        session: Session,
        /// The provider already held a session; no new connection was made
        already_authenticated: bool,
    },
    ConnectFailed {
        task: TaskId,
        error: String,
    },
    AccountDetails {
        address: String,
        public_key: Option<String>,
    },
    AccountDetailsFailed(String),
}
