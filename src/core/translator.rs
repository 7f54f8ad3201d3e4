use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            forum::ForumMsg, session::SessionMsg, system::SystemMsg, task::TaskMsg, ui::UiMsg,
            Msg,
        },
        raw_msg::RawMsg,
        state::{task::TaskKind, ui::Section, AppState},
    },
    domain::forum::CategoryFilter,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.ui.is_composing() {
        translate_compose_mode_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the create-post form is open
fn translate_compose_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.code == KeyCode::Esc {
        return vec![Msg::Ui(UiMsg::CancelCompose)];
    }

    // The form is frozen while its submission is in flight
    if state.tasks.is_pending(TaskKind::CreatePost) {
        return vec![];
    }

    match key {
        KeyEvent {
            code: KeyCode::Char('p') | KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Ui(UiMsg::SubmitCompose)],

        KeyEvent {
            code: KeyCode::Tab, ..
        } => vec![Msg::Ui(UiMsg::FocusNextField)],

        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => vec![Msg::Ui(UiMsg::FocusPrevField)],

        // Everything else is edited by the text area engine
        _ => vec![Msg::Ui(UiMsg::ProcessComposeInput(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.code == KeyCode::Esc && !state.tasks.is_idle() {
        return vec![Msg::Task(TaskMsg::CancelAll)];
    }

    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ScrollUp => forum_only(state, ForumMsg::ScrollUp),
        Action::ScrollDown => forum_only(state, ForumMsg::ScrollDown),
        Action::ScrollToTop => forum_only(state, ForumMsg::ScrollToTop),
        Action::ScrollToBottom => forum_only(state, ForumMsg::ScrollToBottom),
        Action::Unselect if state.ui.section == Section::Forum => {
            vec![Msg::Forum(ForumMsg::DeselectPost)]
        }
        Action::Unselect => vec![Msg::System(SystemMsg::ClearStatusMessage)],
        Action::NextFilter => forum_only(state, ForumMsg::NextFilter),
        Action::PrevFilter => forum_only(state, ForumMsg::PrevFilter),
        Action::ResetFilter => forum_only(state, ForumMsg::SetFilter(CategoryFilter::All)),
        Action::Reward => forum_only(state, ForumMsg::RewardSelected),
        Action::NextSection => vec![Msg::Ui(UiMsg::NextSection)],
        Action::GoHome => vec![Msg::Ui(UiMsg::Navigate(Section::Home))],
        Action::GoForum => vec![Msg::Ui(UiMsg::Navigate(Section::Forum))],
        Action::GoProfile => vec![Msg::Ui(UiMsg::Navigate(Section::Profile))],
        Action::Explore => vec![Msg::Ui(UiMsg::Explore)],
        Action::NewPost => vec![Msg::Ui(UiMsg::ShowCompose)],
        Action::ToggleWallet => vec![Msg::Session(SessionMsg::ToggleWallet)],
        Action::AccountDetails => vec![Msg::Session(SessionMsg::RequestAccountDetails)],
        Action::CancelTasks => vec![Msg::Task(TaskMsg::CancelAll)],
    }
}

/// List navigation only applies where the post list is shown
fn forum_only(state: &AppState, msg: ForumMsg) -> Vec<Msg> {
    if state.ui.section == Section::Forum {
        vec![Msg::Forum(msg)]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        core::state::ui::ComposeForm, domain::session::Session,
        infrastructure::config::Config,
    };

    fn create_test_state() -> AppState {
        AppState::new_with_config(Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn composing_state() -> AppState {
        let mut state = create_test_state();
        state.session.set(Session::new("ST1", "me"));
        state.ui.compose = Some(ComposeForm::default());
        state
    }

    #[test]
    fn test_system_events() {
        let state = create_test_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(80, 24), &state),
            vec![Msg::System(SystemMsg::Resize(80, 24))]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
    }

    #[test]
    fn test_global_keys_win_in_every_mode() {
        let state = composing_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('c')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('z')), &state),
            vec![Msg::System(SystemMsg::Suspend)]
        );
    }

    #[rstest]
    #[case(ctrl('p'), Msg::Ui(UiMsg::SubmitCompose))]
    #[case(ctrl('s'), Msg::Ui(UiMsg::SubmitCompose))]
    #[case(key(KeyCode::Tab), Msg::Ui(UiMsg::FocusNextField))]
    #[case(key(KeyCode::BackTab), Msg::Ui(UiMsg::FocusPrevField))]
    #[case(key(KeyCode::Esc), Msg::Ui(UiMsg::CancelCompose))]
    #[case(key(KeyCode::Char('q')), Msg::Ui(UiMsg::ProcessComposeInput(key(KeyCode::Char('q')))))]
    fn test_compose_mode_keys(#[case] input: KeyEvent, #[case] expected: Msg) {
        let state = composing_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(input), &state),
            vec![expected]
        );
    }

    #[test]
    fn test_compose_input_ignored_while_submitting() {
        let mut state = composing_state();
        state.tasks.begin(TaskKind::CreatePost);
        assert!(translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('a'))), &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Key(ctrl('p')), &state).is_empty());
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state),
            vec![Msg::Ui(UiMsg::CancelCompose)]
        );
    }

    #[test]
    fn test_escape_cancels_in_flight_tasks() {
        let mut state = create_test_state();
        state.tasks.begin(TaskKind::Connect);
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state),
            vec![Msg::Task(TaskMsg::CancelAll)]
        );
    }

    #[rstest]
    #[case(key(KeyCode::Char('q')), vec![Msg::System(SystemMsg::Quit)])]
    #[case(key(KeyCode::Char('n')), vec![Msg::Ui(UiMsg::ShowCompose)])]
    #[case(key(KeyCode::Char('w')), vec![Msg::Session(SessionMsg::ToggleWallet)])]
    #[case(key(KeyCode::Char('3')), vec![Msg::Ui(UiMsg::Navigate(Section::Profile))])]
    #[case(key(KeyCode::Char('j')), vec![])]
    #[case(key(KeyCode::Char('0')), vec![])]
    #[case(key(KeyCode::Esc), vec![Msg::System(SystemMsg::ClearStatusMessage)])]
    fn test_normal_mode_keys_on_home(#[case] input: KeyEvent, #[case] expected: Vec<Msg>) {
        let state = create_test_state();
        assert_eq!(translate_raw_to_domain(RawMsg::Key(input), &state), expected);
    }

    #[rstest]
    #[case(key(KeyCode::Char('j')), Msg::Forum(ForumMsg::ScrollDown))]
    #[case(key(KeyCode::Char('k')), Msg::Forum(ForumMsg::ScrollUp))]
    #[case(key(KeyCode::Char('r')), Msg::Forum(ForumMsg::RewardSelected))]
    #[case(key(KeyCode::Char('f')), Msg::Forum(ForumMsg::NextFilter))]
    #[case(key(KeyCode::Char('0')), Msg::Forum(ForumMsg::SetFilter(CategoryFilter::All)))]
    #[case(key(KeyCode::Esc), Msg::Forum(ForumMsg::DeselectPost))]
    fn test_normal_mode_keys_on_forum(#[case] input: KeyEvent, #[case] expected: Msg) {
        let mut state = create_test_state();
        state.ui.section = Section::Forum;
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(input), &state),
            vec![expected]
        );
    }
}
