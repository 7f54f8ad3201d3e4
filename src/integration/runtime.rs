use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::{
        identity::IdentityProvider, storage::SessionStorage,
        tui::textarea_engine::TuiTextAreaEngine,
    },
};

/// Owns the application state and drives the translate → update → execute loop.
/// Background tasks report back through the message channel returned by `get_sender`.
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a runtime without side effects; commands only pile up in the queue
    pub fn new(initial_state: AppState) -> Self {
        static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a runtime whose commands reach the given wallet provider and storage
    pub fn new_with_executor(
        initial_state: AppState,
        provider: Arc<dyn IdentityProvider>,
        storage: Arc<dyn SessionStorage>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(
            runtime.msg_tx.clone(),
            provider,
            storage,
        ));
        runtime
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_tui_sender(tui_sender);
                Ok(())
            }
            None => Err("No executor available. Use new_with_executor() first.".to_string()),
        }
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::Sender<()>,
    ) -> Result<(), String> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_render_request_sender(render_sender);
                Ok(())
            }
            None => Err("No executor available. Use new_with_executor() first.".to_string()),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Queue a command without going through `update`, e.g. the startup session restore
    pub fn enqueue_command(&mut self, cmd: Cmd) {
        self.cmd_queue.push_back(cmd);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = &self.cmd_executor else {
            return Err("No command executor available. Use new_with_executor().".to_string());
        };
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        Ok(executor.execute_commands(&commands))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Msg: {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        // Every processed message may change what is on screen
        self.cmd_queue.push_back(Cmd::RequestRender);
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Each raw input is translated against the state left by the previous one
        while let Some(raw_msg) = self
            .raw_msg_queue
            .pop_front()
            .or_else(|| self.raw_msg_rx.try_recv().ok())
        {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        // Results of background tasks
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Wait for the next result of a background task and process it.
    /// Returns false when no sender is left.
    pub async fn process_next_background_msg(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            post_count: self.state.forum.store.len(),
            is_connected: self.state.is_connected(),
            is_composing: self.state.ui.is_composing(),
            in_flight_tasks: self.state.tasks.len(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub post_count: usize,
    pub is_connected: bool,
    pub is_composing: bool,
    pub in_flight_tasks: usize,
    pub has_executor: bool,
}
