//! Forum component
//!
//! Filter bar plus the scrollable post list.

use chrono::Utc;
use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListState, ListView};

use crate::{
    core::state::AppState,
    presentation::{
        config::{hint_for, Action},
        widgets::{
            filter_bar::FilterBarWidget,
            post_card::{CardStyles, PostCard},
        },
    },
};

/// Stateless renderer of `ForumState`
#[derive(Debug, Clone, Default)]
pub struct ForumComponent;

impl ForumComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [filter_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let filter_bar = FilterBarWidget::new(
            state.forum.filter(),
            styles.get_or_default("nav_active"),
        );
        frame.render_widget(filter_bar, filter_area);

        let padding = Padding::horizontal(1);
        let posts = state.forum.visible();
        if posts.is_empty() {
            let empty = Paragraph::new("No posts in this category yet")
                .style(styles.get_or_default("muted"))
                .centered()
                .block(Block::default().padding(padding));
            frame.render_widget(empty, list_area);
            return;
        }

        let now = Utc::now();
        let card_styles = CardStyles::from_styles(styles);
        let reward_hint = hint_for(&state.config.config.keybindings, &Action::Reward);
        let item_count = posts.len();
        let cards: Vec<_> = posts
            .into_iter()
            .map(|post| {
                let card = PostCard::new(
                    post.clone(),
                    now,
                    reward_hint.clone(),
                    card_styles,
                    padding,
                );
                let height = card.calculate_height(&list_area);
                (card, height)
            })
            .collect();

        let builder = ListBuilder::new(move |context| {
            let mut item = cards[context.index].clone();
            item.0.highlight = context.is_selected;
            (item.0, item.1)
        });

        let mut list_state = ListState::default();
        list_state.select(state.forum.selected_index());

        let list = ListView::new(builder, item_count).block(Block::default().padding(padding));
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }
}
