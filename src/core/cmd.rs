use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{core::state::task::TaskId, domain::forum::PostDraft};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (wallet provider calls, session storage, timers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
pub enum Cmd {
    // Wallet session commands
    ConnectWallet {
        task: TaskId,
    },
    DisconnectWallet,
    RestoreSession,
    FetchAccountDetails,

    // Simulated submissions; the executor waits `delay_ms` before reporting back
    SubmitPost {
        task: TaskId,
        draft: PostDraft,
        delay_ms: u64,
    },
    SubmitReward {
        task: TaskId,
        post_id: u64,
        amount: u64,
        delay_ms: u64,
    },
    CancelTask(TaskId),

    // Notification timers
    ScheduleToastDismiss {
        id: u64,
        after_ms: u64,
    },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via bounded render_req_sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::ConnectWallet { .. }
            | Cmd::DisconnectWallet
            | Cmd::RestoreSession
            | Cmd::FetchAccountDetails
            | Cmd::SubmitPost { .. }
            | Cmd::SubmitReward { .. }
            | Cmd::ScheduleToastDismiss { .. } => true,

            Cmd::CancelTask(_)
            | Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::RequestRender | Cmd::CancelTask(_) => 0,

            // User actions have high priority
            Cmd::SubmitPost { .. } | Cmd::SubmitReward { .. } => 1,

            // Wallet provider calls have medium priority
            Cmd::ConnectWallet { .. }
            | Cmd::DisconnectWallet
            | Cmd::RestoreSession
            | Cmd::FetchAccountDetails => 2,

            // Timers have low priority
            Cmd::ScheduleToastDismiss { .. } => 3,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }
}
