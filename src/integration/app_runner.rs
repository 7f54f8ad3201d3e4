use std::sync::Arc;

use color_eyre::eyre::{Report, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{task::TaskMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        identity::{IdentityProvider, LocalWallet},
        storage::{FileStorage, SessionStorage},
        tui::{event_source::EventSource, real::RealTui, Event, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm loop against a terminal: events in, frames out
pub struct AppRunner {
    runtime: Runtime,
    renderer: Renderer,
    tui: Arc<Mutex<dyn TuiLike>>,
    event_source: EventSource,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::Receiver<()>,
    pending_resize: Option<(u16, u16)>,
    frames_drawn: usize,
}

impl AppRunner {
    /// Runner on the real terminal with the bundled wallet and file storage
    pub fn new_with_real(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let tui = RealTui::new()?
            .tick_rate(tick_rate)
            .frame_rate(frame_rate)
            .paste(true);
        Self::new(config, Arc::new(Mutex::new(tui)))
    }

    pub fn new(config: Config, tui: Arc<Mutex<dyn TuiLike>>) -> Result<Self> {
        let provider: Arc<dyn IdentityProvider> =
            Arc::new(LocalWallet::from_config(&config.wallet)?);
        let storage: Arc<dyn SessionStorage> =
            Arc::new(FileStorage::new(config.storage_path()));
        Self::new_with_collaborators(config, tui, provider, storage)
    }

    /// Assemble the runner from explicit collaborators; the session is restored on the first cycle
    pub fn new_with_collaborators(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike>>,
        provider: Arc<dyn IdentityProvider>,
        storage: Arc<dyn SessionStorage>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new_with_executor(initial_state, provider, storage);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        // One slot: extra requests while a frame is pending are dropped
        let (render_req_tx, render_req_rx) = mpsc::channel(1);
        runtime
            .add_tui_sender(tui_cmd_tx)
            .map_err(Report::msg)?;
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(Report::msg)?;
        runtime.enqueue_command(Cmd::RestoreSession);

        let event_source = EventSource::tui(Arc::clone(&tui));
        Ok(Self {
            runtime,
            renderer: Renderer::new(),
            tui,
            event_source,
            tui_cmd_rx,
            render_req_rx,
            pending_resize: None,
            frames_drawn: 0,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    /// Replace where events come from, e.g. a scripted queue
    pub fn set_event_source(&mut self, event_source: EventSource) {
        self.event_source = event_source;
    }

    /// Run until the state asks to quit or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let result = loop {
            match self.run_one_cycle().await {
                Ok(true) => continue,
                Ok(false) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        // Pending simulated actions must not outlive the loop
        self.runtime.send_msg(Msg::Task(TaskMsg::CancelAll));
        if let Err(e) = self.runtime.run_update_cycle() {
            log::warn!("Failed to cancel tasks on shutdown: {e}");
        }

        self.tui.lock().await.exit()?;
        result
    }

    /// Handle one terminal event, run the update cycle and draw when needed.
    /// Returns `false` once the app should stop.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let mut saw_frame_event = false;
        let mut resizes = Vec::new();

        match self.event_source.next().await {
            None | Some(Event::Quit) | Some(Event::Closed) => {
                self.runtime.send_raw_msg(RawMsg::Quit);
            }
            Some(Event::Tick) => self.runtime.send_raw_msg(RawMsg::Tick),
            Some(Event::Render) => saw_frame_event = true,
            Some(Event::Resize(w, h)) => resizes.push((w, h)),
            Some(Event::Key(key)) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Some(Event::Paste(text)) => self.paste(&text),
            Some(Event::Error) => self
                .runtime
                .send_raw_msg(RawMsg::Error("Terminal event stream failed".to_string())),
            Some(Event::Init | Event::FocusGained | Event::FocusLost | Event::Mouse(_)) => {}
        }

        self.pending_resize = Coalescer::decide_resize(self.pending_resize, &resizes);
        if let Some((w, h)) = self.pending_resize.take() {
            self.runtime.send_raw_msg(RawMsg::Resize(w, h));
        }

        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    saw_frame_event = true;
                }
            }
        }

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
            saw_frame_event = true;
        }

        let queued = Coalescer::drain_requests(&mut self.render_req_rx);
        if Coalescer::decide_render(queued, saw_frame_event, self.frames_drawn == 0) {
            self.render().await?;
        }

        Ok(!self.runtime.state().system.should_quit)
    }

    /// Pasted text only makes sense inside the compose form
    fn paste(&mut self, text: &str) {
        if !self.runtime.state().ui.is_composing() {
            log::debug!("Ignoring paste outside of the compose form");
            return;
        }
        for c in text.chars() {
            let code = match c {
                '\n' => KeyCode::Enter,
                '\r' => continue,
                c => KeyCode::Char(c),
            };
            self.runtime
                .send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        let mut tui = self.tui.lock().await;
        tui.suspend()?;
        // Execution continues here once the process is resumed
        tui.resume()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await?;
        self.frames_drawn += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::state::ui::Section,
        infrastructure::{storage::MemoryStorage, tui::test::TestTui},
    };

    fn runner(events: Vec<Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::with_events(100, 30, events)?));
        let tui: Arc<Mutex<dyn TuiLike>> = test_tui.clone();
        let wallet = LocalWallet::from_config(&Config::default().wallet)?;
        let runner = AppRunner::new_with_collaborators(
            Config::default(),
            tui,
            Arc::new(wallet),
            Arc::new(MemoryStorage::new()),
        )?;
        Ok((runner, test_tui))
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_exhausted_event_source_quits() -> Result<()> {
        let (mut runner, test_tui) = runner(vec![])?;
        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        let tui = test_tui.lock().await;
        assert!(!tui.is_entered());
        assert!(tui.draw_count() >= 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_keys_navigate_and_render() -> Result<()> {
        let (mut runner, test_tui) = runner(vec![key('2')])?;
        assert!(runner.run_one_cycle().await?);
        assert_eq!(runner.runtime().state().ui.section, Section::Forum);
        let screen = test_tui.lock().await.screen_text();
        assert!(screen.contains("The Future of Decentralized Forums"));
        Ok(())
    }

    #[tokio::test]
    async fn test_quit_key_stops_loop() -> Result<()> {
        let (mut runner, _) = runner(vec![key('q'), key('2')])?;
        runner.run().await?;
        // The second key is never consumed
        assert_eq!(runner.runtime().state().ui.section, Section::Home);
        Ok(())
    }

    #[tokio::test]
    async fn test_render_requests_coalesce() -> Result<()> {
        let (mut runner, test_tui) = runner(vec![key('j'), key('k'), Event::Tick])?;
        for _ in 0..3 {
            runner.run_one_cycle().await?;
        }
        // One frame per cycle at most, however many messages were handled
        assert!(test_tui.lock().await.draw_count() <= 3);
        assert_eq!(runner.frames_drawn(), test_tui.lock().await.draw_count());
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_reaches_terminal() -> Result<()> {
        let (mut runner, test_tui) = runner(vec![Event::Resize(60, 20)])?;
        runner.run_one_cycle().await?;
        let screen = test_tui.lock().await.screen_text();
        assert_eq!(screen.lines().count(), 20);
        Ok(())
    }

    #[tokio::test]
    async fn test_paste_only_in_compose() -> Result<()> {
        let (mut runner, _) = runner(vec![Event::Paste("qq".into())])?;
        runner.run_one_cycle().await?;
        assert!(!runner.runtime().state().system.should_quit);
        Ok(())
    }
}
