//! Home component
//!
//! Landing section: hero text and board-wide statistics.

use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::{
    core::state::AppState,
    domain::forum::{Aggregate, TOKEN_SYMBOL},
    presentation::config::{hint_for, Action},
};

#[derive(Debug, Clone, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    /// Label and value of each stat card
    pub fn stat_cards(aggregate: &Aggregate) -> [(&'static str, String); 3] {
        [
            ("Total Posts", aggregate.post_count.separate_with_commas()),
            (
                "Total Rewards",
                format!(
                    "{} {TOKEN_SYMBOL}",
                    aggregate.total_rewards.separate_with_commas()
                ),
            ),
            ("Active Users", aggregate.distinct_authors.separate_with_commas()),
        ]
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [hero_area, stats_area, _] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(area);

        let explore = hint_for(&state.config.config.keybindings, &Action::Explore)
            .map(|key| format!("Press {key} to explore the forum"))
            .unwrap_or_default();
        let hero = Text::from(vec![
            Line::styled("Welcome to ThinkBucks", styles.get_or_default("title")),
            Line::raw(""),
            Line::raw("Share ideas, get rewarded with FORUM tokens."),
            Line::raw("Reward the posts that made you think."),
            Line::styled(explore, styles.get_or_default("muted")),
        ]);
        frame.render_widget(
            Paragraph::new(hero).centered().block(Block::default().padding(Padding::top(1))),
            hero_area,
        );

        let cards = Self::stat_cards(&state.forum.store.aggregate());
        let card_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(stats_area);
        for ((label, value), card_area) in cards.into_iter().zip(card_areas.iter()) {
            let card = Paragraph::new(Text::from(vec![
                Line::styled(value, styles.get_or_default("title")),
                Line::styled(label, styles.get_or_default("muted")),
            ]))
            .centered()
            .block(Block::bordered().border_style(styles.get_or_default("muted")));
            frame.render_widget(card, *card_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        infrastructure::config::Config, presentation::components::test_support::render_view,
    };

    #[test]
    fn test_stat_cards_for_seeded_board() {
        let state = AppState::new_with_config(Config::default());
        let cards = HomeComponent::stat_cards(&state.forum.store.aggregate());
        assert_eq!(cards[0], ("Total Posts", "3".to_string()));
        assert_eq!(cards[1], ("Total Rewards", "350 FORUM".to_string()));
        assert_eq!(cards[2], ("Active Users", "3".to_string()));
    }

    #[test]
    fn test_view_renders_hero_and_stats() -> Result<()> {
        let state = AppState::new_with_config(Config::default());
        let screen = render_view(90, 12, |f| HomeComponent::new().view(&state, f, f.area()))?;
        assert!(screen.contains("Welcome to ThinkBucks"));
        assert!(screen.contains("Press e to explore the forum"));
        assert!(screen.contains("Total Rewards"));
        assert!(screen.contains("350 FORUM"));
        Ok(())
    }
}
