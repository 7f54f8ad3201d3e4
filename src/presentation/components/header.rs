//! Header component
//!
//! Brand, section navigation and the wallet button.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;
use thousands::Separable;

use crate::{
    core::state::{ui::Section, AppState},
    domain::{forum::TOKEN_SYMBOL, text::shorten_address},
};

pub const APP_TITLE: &str = "ThinkBucks";

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    /// Text of the wallet button
    pub fn wallet_label(state: &AppState) -> String {
        match state.session.current() {
            Some(session) => format!(
                "{} | {} {TOKEN_SYMBOL} | {}",
                session.display_name,
                session.balance.separate_with_commas(),
                shorten_address(session.address.as_str())
            ),
            None => "Connect Wallet".to_string(),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles.get_or_default("muted"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label = Self::wallet_label(state);
        let [title_area, nav_area, wallet_area] = Layout::horizontal([
            Constraint::Length(APP_TITLE.len() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(label.chars().count() as u16 + 2),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(APP_TITLE, styles.get_or_default("title"))),
            title_area,
        );

        let titles: Vec<String> = Section::iter().map(|s| s.to_string()).collect();
        let selected = Section::iter()
            .position(|s| s == state.ui.section)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(styles.get_or_default("nav_inactive"))
            .highlight_style(styles.get_or_default("nav_active"));
        frame.render_widget(tabs, nav_area);

        let wallet_style = if state.is_connected() {
            styles.get_or_default("rewarded")
        } else {
            styles.get_or_default("title")
        };
        frame.render_widget(
            Paragraph::new(Span::styled(label, wallet_style)).right_aligned(),
            wallet_area,
        );
    }
}
