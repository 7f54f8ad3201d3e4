//! Status bar component
//!
//! One line at the bottom: the latest status message, or key hints when
//! there is nothing to report.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{ui::Section, AppState},
    presentation::config::{hint_for, Action, KeyBindings},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// `key: label` pairs relevant to the current section
    pub fn key_hints(state: &AppState) -> String {
        let bindings = &state.config.config.keybindings;
        let wallet = if state.is_connected() {
            "disconnect"
        } else {
            "connect"
        };
        let mut hints = vec![
            (Action::NextSection, "section"),
            (Action::NewPost, "new post"),
            (Action::ToggleWallet, wallet),
        ];
        if state.ui.section == Section::Forum {
            hints.extend([
                (Action::ScrollDown, "down"),
                (Action::ScrollUp, "up"),
                (Action::NextFilter, "filter"),
                (Action::Reward, "reward"),
            ]);
        }
        hints.push((Action::Quit, "quit"));
        Self::format_hints(bindings, &hints)
    }

    fn format_hints(bindings: &KeyBindings, hints: &[(Action, &str)]) -> String {
        hints
            .iter()
            .filter_map(|(action, label)| {
                hint_for(bindings, action).map(|key| format!("{key}: {label}"))
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        frame.render_widget(Clear, area);
        let line = match &state.system.status_message {
            Some(message) => Line::styled(message.clone(), styles.get_or_default("status")),
            None => Line::styled(Self::key_hints(state), styles.get_or_default("muted")),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;
    use crossterm::event::{KeyCode, KeyEvent};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        core::{
            msg::{forum::ForumMsg, Msg},
            raw_msg::RawMsg,
            translator::translate_raw_to_domain,
            update::update,
        },
        domain::session::Session,
        infrastructure::config::Config,
        presentation::components::test_support::render_view,
    };

    #[test]
    fn test_key_hints_home() {
        let state = AppState::new_with_config(Config::default());
        assert_eq!(
            StatusBarComponent::key_hints(&state),
            "tab: section | n: new post | w: connect | q: quit"
        );
    }

    #[test]
    fn test_key_hints_forum() {
        let mut state = AppState::new_with_config(Config::default());
        state.ui.section = Section::Forum;
        assert_eq!(
            StatusBarComponent::key_hints(&state),
            "tab: section | n: new post | w: connect | j: down | k: up | f: filter | r: reward | q: quit"
        );
    }

    #[test]
    fn test_status_message_wins() -> Result<()> {
        let mut state = AppState::new_with_config(Config::default());
        state.system.status_message = Some("Post already rewarded".into());
        let screen = render_view(60, 1, |f| StatusBarComponent::new().view(&state, f, f.area()))?;
        assert_eq!(screen, "Post already rewarded");
        Ok(())
    }

    #[rstest]
    #[case(Section::Forum)]
    #[case(Section::Home)]
    fn test_escape_brings_back_key_hints(#[case] section: Section) -> Result<()> {
        let mut state = AppState::new_with_config(Config::default());
        state.session.set(Session::new("ST1ME", "me"));
        let (mut state, _) = update(Msg::Forum(ForumMsg::RewardPost(1)), state);
        state.ui.section = section;
        let bar = StatusBarComponent::new();
        let screen = render_view(120, 1, |f| bar.view(&state, f, f.area()))?;
        assert_eq!(screen, "Post already rewarded");

        let esc = RawMsg::Key(KeyEvent::from(KeyCode::Esc));
        for msg in translate_raw_to_domain(esc, &state) {
            state = update(msg, state).0;
        }
        let screen = render_view(120, 1, |f| bar.view(&state, f, f.area()))?;
        assert_eq!(screen, StatusBarComponent::key_hints(&state));
        Ok(())
    }
}
