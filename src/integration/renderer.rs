use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui::{Frame, TuiLike},
    presentation::components::Components,
};

/// Draws one frame of `AppState` through any `TuiLike`
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(&self, tui: &Arc<Mutex<dyn TuiLike>>, state: &AppState) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::Config, tui::test::TestTui};

    #[tokio::test]
    async fn renderer_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(100, 30)?));
        let tui: Arc<Mutex<dyn TuiLike>> = test_tui.clone();
        let state = AppState::new_with_config(Config::default());

        let renderer = Renderer::new();
        renderer.render(&tui, &state).await?;
        renderer.render(&tui, &state).await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 2);
        assert!(guard.screen_text().contains("ThinkBucks"));
        Ok(())
    }
}
