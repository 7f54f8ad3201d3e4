//! Toasts and the loading overlay

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState, domain::text::wrap_text, presentation::components::centered_rect,
};

/// Toasts drawn at once; older ones wait for their dismiss timer
pub const VISIBLE_TOASTS: usize = 3;
const TOAST_WIDTH: u16 = 44;

#[derive(Debug, Clone, Default)]
pub struct NotificationsComponent;

impl NotificationsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        self.view_loading(state, frame, area);
        self.view_toasts(state, frame, area);
    }

    fn view_loading(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(message) = state.loading_message() else {
            return;
        };
        let styles = &state.config.config.styles;
        let width = message.chars().count() as u16 + 6;
        let overlay = centered_rect(area, width, 5);
        frame.render_widget(Clear, overlay);
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(message, styles.get_or_default("loading")),
                Line::styled("esc to cancel", styles.get_or_default("muted")),
            ])
            .centered()
            .block(Block::bordered().border_style(styles.get_or_default("loading"))),
            overlay,
        );
    }

    /// Newest toast on top, stacked down from the top-right corner
    fn view_toasts(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let width = TOAST_WIDTH.min(area.width);
        let mut y = area.y;
        for toast in state.notifications.toasts().rev().take(VISIBLE_TOASTS) {
            let style = if toast.is_error() {
                styles.get_or_default("toast_error")
            } else {
                styles.get_or_default("toast_success")
            };
            let message = wrap_text(&toast.message, width.saturating_sub(2) as usize);
            let height = (message.lines().count() as u16).max(1);
            if y + height > area.bottom() {
                break;
            }
            let rect = Rect::new(area.right().saturating_sub(width), y, width, height);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(message)
                    .style(style)
                    .block(Block::default().padding(Padding::horizontal(1))),
                rect,
            );
            y += height;
        }
    }
}
