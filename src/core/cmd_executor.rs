use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{forum::ForumMsg, notification::NotificationMsg, session::SessionMsg, Msg},
        state::task::TaskId,
    },
    domain::{
        error::ProviderError,
        session::{ProviderResponse, Session},
    },
    infrastructure::{
        identity::{
            accounts_from_value, balance_from_value, IdentityProvider, METHOD_GET_ACCOUNTS,
            METHOD_GET_BALANCE,
        },
        storage::{load_session, save_session, SessionStorage, SESSION_STORAGE_KEY},
    },
};

/// Command executor that runs side effects and reports results back as messages
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    provider: Arc<dyn IdentityProvider>,
    storage: Arc<dyn SessionStorage>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
    in_flight: Arc<Mutex<HashMap<TaskId, CancellationToken>>>,
}

impl CmdExecutor {
    pub fn new(
        msg_sender: mpsc::UnboundedSender<Msg>,
        provider: Arc<dyn IdentityProvider>,
        storage: Arc<dyn SessionStorage>,
    ) -> Self {
        Self {
            msg_sender,
            provider,
            storage,
            tui_sender: None,
            render_req_sender: None,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Number of cancellable tasks still running
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.lock().map(|tasks| tasks.len()).unwrap_or(0)
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::ConnectWallet { task } => {
                let provider = Arc::clone(&self.provider);
                let storage = Arc::clone(&self.storage);
                let sender = self.msg_sender.clone();
                let task = *task;
                self.spawn_cancellable(task, async move {
                    let msg = match connect_flow(provider.as_ref(), storage.as_ref()).await {
                        Ok((session, already_authenticated)) => SessionMsg::Connected {
                            task,
                            session,
                            already_authenticated,
                        },
                        Err(e) => SessionMsg::ConnectFailed {
                            task,
                            error: e.to_string(),
                        },
                    };
                    let _ = sender.send(Msg::Session(msg));
                })?;
            }

            Cmd::DisconnectWallet => {
                if let Err(e) = self.provider.disconnect() {
                    log::warn!("Wallet provider failed to sign out: {e}");
                }
                if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
                    log::warn!("Failed to clear stored session: {e}");
                }
            }

            Cmd::RestoreSession => {
                let provider = Arc::clone(&self.provider);
                let storage = Arc::clone(&self.storage);
                let sender = self.msg_sender.clone();
                self.spawn(async move {
                    let session = restore_flow(provider.as_ref(), storage.as_ref()).await;
                    let _ = sender.send(Msg::Session(SessionMsg::Restored(session)));
                })?;
            }

            Cmd::FetchAccountDetails => {
                let provider = Arc::clone(&self.provider);
                let storage = Arc::clone(&self.storage);
                let sender = self.msg_sender.clone();
                self.spawn(async move {
                    let msg = match account_details(provider.as_ref(), storage.as_ref()).await {
                        Ok(response) => match response.primary_address() {
                            Some(account) => SessionMsg::AccountDetails {
                                address: account.address.clone(),
                                public_key: account.public_key.clone(),
                            },
                            None => SessionMsg::AccountDetailsFailed("no address returned".into()),
                        },
                        Err(e) => SessionMsg::AccountDetailsFailed(e.to_string()),
                    };
                    let _ = sender.send(Msg::Session(msg));
                })?;
            }

            Cmd::SubmitPost {
                task,
                draft,
                delay_ms,
            } => {
                let sender = self.msg_sender.clone();
                let msg = Msg::Forum(ForumMsg::PostSubmitted {
                    task: *task,
                    draft: draft.clone(),
                });
                let delay = Duration::from_millis(*delay_ms);
                self.spawn_cancellable(*task, async move {
                    tokio::time::sleep(delay).await;
                    let _ = sender.send(msg);
                })?;
            }

            Cmd::SubmitReward {
                task,
                post_id,
                amount,
                delay_ms,
            } => {
                let sender = self.msg_sender.clone();
                let msg = Msg::Forum(ForumMsg::RewardSettled {
                    task: *task,
                    post_id: *post_id,
                    amount: *amount,
                });
                let delay = Duration::from_millis(*delay_ms);
                self.spawn_cancellable(*task, async move {
                    tokio::time::sleep(delay).await;
                    let _ = sender.send(msg);
                })?;
            }

            Cmd::CancelTask(task) => {
                if let Some(token) = self.take_token(*task) {
                    log::info!("Cancelling {task}");
                    token.cancel();
                }
            }

            Cmd::ScheduleToastDismiss { id, after_ms } => {
                let sender = self.msg_sender.clone();
                let msg = Msg::Notification(NotificationMsg::Dismiss(*id));
                let delay = Duration::from_millis(*after_ms);
                self.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = sender.send(msg);
                })?;
            }

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => {
                    let _ = tx.send(tui_cmd.clone());
                }
                None => log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}"),
            },

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    // A full channel already holds a pending render
                    let _ = rtx.try_send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }

    fn spawn<F>(&self, fut: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| eyre!("no async runtime for background command: {e}"))?;
        handle.spawn(fut);
        Ok(())
    }

    /// Run `fut` until it completes or `task` is cancelled
    fn spawn_cancellable<F>(&self, task: TaskId, fut: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Ok(mut tasks) = self.in_flight.lock() {
            tasks.insert(task, token.clone());
        }
        let in_flight = Arc::clone(&self.in_flight);
        self.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    log::info!("{task} cancelled before completion");
                }
                _ = fut => {}
            }
            if let Ok(mut tasks) = in_flight.lock() {
                tasks.remove(&task);
            }
        })
    }

    fn take_token(&self, task: TaskId) -> Option<CancellationToken> {
        self.in_flight
            .lock()
            .ok()
            .and_then(|mut tasks| tasks.remove(&task))
    }
}

/// Authenticate with the provider, persist the payload and build the session.
/// Returns whether the provider was already holding a session.
async fn connect_flow(
    provider: &dyn IdentityProvider,
    storage: &dyn SessionStorage,
) -> Result<(Session, bool), ProviderError> {
    let existing = if provider.check_connected() {
        provider.read_local_session()
    } else {
        None
    };
    let already_authenticated = existing.is_some();
    let response = match existing {
        Some(response) => response,
        None => provider.connect().await?,
    };

    let session = Session::from_response(&response)?;
    if let Err(e) = save_session(storage, &response) {
        log::warn!("Failed to persist session: {e}");
    }
    let balance = fetch_balance(provider, &session.address).await;
    Ok((session.with_balance(balance), already_authenticated))
}

/// Session from storage first, then from the provider
async fn restore_flow(
    provider: &dyn IdentityProvider,
    storage: &dyn SessionStorage,
) -> Option<Session> {
    let stored = match load_session(storage) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Failed to read stored session: {e}");
            None
        }
    };
    let response = stored.or_else(|| {
        provider
            .check_connected()
            .then(|| provider.read_local_session())
            .flatten()
    })?;
    let session = match Session::from_response(&response) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Ignoring stored session: {e}");
            return None;
        }
    };
    let balance = fetch_balance(provider, &session.address).await;
    Some(session.with_balance(balance))
}

async fn fetch_balance(provider: &dyn IdentityProvider, address: &str) -> u64 {
    let params = serde_json::json!({ "address": address });
    match provider
        .request(METHOD_GET_BALANCE, params)
        .await
        .and_then(|value| balance_from_value(&value))
    {
        Ok(balance) => balance,
        Err(e) => {
            log::warn!("Could not fetch balance for {address}: {e}");
            0
        }
    }
}

/// Provider account details, falling back to the stored session while signed out of the provider
async fn account_details(
    provider: &dyn IdentityProvider,
    storage: &dyn SessionStorage,
) -> Result<ProviderResponse, ProviderError> {
    match provider.request(METHOD_GET_ACCOUNTS, Value::Null).await {
        Ok(value) => accounts_from_value(value),
        Err(ProviderError::NotConnected) => {
            load_session(storage)?.ok_or(ProviderError::NotConnected)
        }
        Err(e) => Err(e),
    }
}
