//! Profile component
//!
//! The connected user's summary and their own posts.

use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::{
    core::state::AppState,
    domain::{
        forum::{Post, TOKEN_SYMBOL},
        text::excerpt,
    },
    presentation::widgets::post_stats::PostStats,
};

pub const CONNECT_PROMPT: &str = "Connect your wallet to see your posts";
pub const NO_POSTS_PROMPT: &str = "No posts yet. Create your first post!";

/// Characters of the body shown per profile entry
const EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct ProfileComponent;

impl ProfileComponent {
    pub fn new() -> Self {
        Self
    }

    /// Posts authored by the connected session, newest first
    pub fn own_posts(state: &AppState) -> Vec<&Post> {
        match state.session.address() {
            Some(address) => state.forum.store.list_by_author(address).collect(),
            None => vec![],
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let muted = styles.get_or_default("muted");
        let area = area.inner(Margin::new(1, 0));

        let Some(session) = state.session.current() else {
            frame.render_widget(
                Paragraph::new(CONNECT_PROMPT).style(muted).centered(),
                area,
            );
            return;
        };

        let [summary_area, posts_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let summary = Text::from(vec![
            Line::styled(session.display_name.clone(), styles.get_or_default("title")),
            Line::styled(session.address.clone(), muted),
            Line::from(format!(
                "Balance: {} {TOKEN_SYMBOL} | Posts: {} | Rewards given: {} {TOKEN_SYMBOL}",
                session.balance.separate_with_commas(),
                session.posts_created,
                session.rewards_given.separate_with_commas()
            )),
        ]);
        frame.render_widget(Paragraph::new(summary), summary_area);

        let posts = Self::own_posts(state);
        if posts.is_empty() {
            frame.render_widget(
                Paragraph::new(NO_POSTS_PROMPT).style(muted).centered(),
                posts_area,
            );
            return;
        }

        let mut text = Text::default();
        for post in posts {
            text.extend(Text::from(Line::styled(
                post.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            text.extend(Text::from(excerpt(&post.body, EXCERPT_CHARS)));
            text.extend::<Text>(
                PostStats::new(post.like_count, post.comment_count, post.reward_total).into(),
            );
            text.extend(Text::raw(""));
        }
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }),
            posts_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::{forum::Category, session::Session},
        infrastructure::config::Config,
        presentation::components::test_support::render_view,
    };

    fn connected_state() -> AppState {
        let mut state = AppState::new_with_config(Config::default());
        state.session.set(Session::new("ST1ME", "me").with_balance(1000));
        state
    }

    #[test]
    fn test_prompts_to_connect() -> Result<()> {
        let state = AppState::new_with_config(Config::default());
        let screen = render_view(60, 5, |f| ProfileComponent::new().view(&state, f, f.area()))?;
        assert!(screen.contains(CONNECT_PROMPT));
        Ok(())
    }

    #[test]
    fn test_prompts_first_post() -> Result<()> {
        let state = connected_state();
        assert!(ProfileComponent::own_posts(&state).is_empty());
        let screen = render_view(80, 8, |f| ProfileComponent::new().view(&state, f, f.area()))?;
        assert!(screen.contains(NO_POSTS_PROMPT));
        assert!(screen.contains("Balance: 1,000 FORUM"));
        Ok(())
    }

    #[test]
    fn test_lists_only_own_posts() -> Result<()> {
        let mut state = connected_state();
        let session = state.session.current().cloned();
        state
            .forum
            .store
            .create("Mine", &"x".repeat(150), Category::General, session.as_ref())?;

        let own: Vec<_> = ProfileComponent::own_posts(&state)
            .iter()
            .map(|p| p.title.clone())
            .collect();
        assert_eq!(own, vec!["Mine"]);

        let screen = render_view(120, 12, |f| ProfileComponent::new().view(&state, f, f.area()))?;
        assert!(screen.contains("Mine"));
        assert!(screen.contains(&format!("{}...", "x".repeat(100))));
        assert!(!screen.contains("Best Practices"));
        Ok(())
    }
}
