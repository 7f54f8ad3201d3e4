use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    core::{
        cmd::Cmd,
        msg::{
            forum::ForumMsg, notification::NotificationMsg, session::SessionMsg,
            system::SystemMsg, task::TaskMsg, ui::UiMsg, Msg,
        },
        state::{
            task::{TaskId, TaskKind},
            ui::ComposeField,
            AppState,
        },
        textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
    },
    domain::{
        error::ForumError,
        forum::{PostDraft, TOKEN_SYMBOL},
        notification::ToastKind,
    },
};

/// Collaborators the update function needs but does not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: NoopTextAreaEngine = NoopTextAreaEngine;
    update_with_context(msg, state, &UpdateContext { text_area: &ENGINE })
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Session(session_msg) => update_session(session_msg, &mut state),
        Msg::Forum(forum_msg) => update_forum(forum_msg, &mut state),
        Msg::Ui(ui_msg) => update_ui(ui_msg, &mut state, ctx),
        Msg::Notification(NotificationMsg::Push { kind, message }) => {
            vec![notify(&mut state, kind, message)]
        }
        Msg::Notification(NotificationMsg::Dismiss(id)) => {
            state.notifications.dismiss(id);
            vec![]
        }
        Msg::Task(TaskMsg::CancelAll) => cancel_all_tasks(&mut state),
    };
    (state, commands)
}

/// Queue a toast and return the command that dismisses it later
fn notify(state: &mut AppState, kind: ToastKind, message: impl Into<String>) -> Cmd {
    let message = message.into();
    match kind {
        ToastKind::Success => log::info!("Notify: {message}"),
        ToastKind::Error => log::warn!("Notify: {message}"),
    }
    let id = state.notifications.push(kind, message);
    Cmd::ScheduleToastDismiss {
        id,
        after_ms: state.config.config.forum.toast_duration_ms,
    }
}

fn require_session(state: &mut AppState) -> Result<(), Cmd> {
    if state.is_connected() {
        Ok(())
    } else {
        Err(notify(
            state,
            ToastKind::Error,
            "Please connect your wallet first!",
        ))
    }
}

fn set_status(state: &mut AppState, message: impl Into<String>) {
    state.system.status_message = Some(message.into());
}

/// Unregister `task`; its outcome supersedes any status line notice.
/// Returns false when the task was already finished or cancelled.
fn finish_task(state: &mut AppState, task: TaskId) -> bool {
    if state.tasks.finish(task).is_none() {
        return false;
    }
    state.system.status_message = None;
    true
}

fn update_session(msg: SessionMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        SessionMsg::ToggleWallet => {
            if state.is_connected() {
                update_session(SessionMsg::Disconnect, state)
            } else {
                update_session(SessionMsg::Connect, state)
            }
        }

        SessionMsg::Connect => {
            if state.is_connected() {
                return vec![notify(state, ToastKind::Success, "Already connected")];
            }
            match state.tasks.begin(TaskKind::Connect) {
                Some(task) => vec![Cmd::ConnectWallet { task }],
                None => {
                    set_status(state, TaskKind::Connect.busy_message());
                    vec![]
                }
            }
        }

        SessionMsg::Disconnect => {
            if state.session.clear().is_none() {
                return vec![];
            }
            let mut cmds = vec![Cmd::DisconnectWallet];
            // A connect still in flight must not bring the session back
            if let Some(task) = state.tasks.pending_id(TaskKind::Connect) {
                state.tasks.finish(task);
                cmds.push(Cmd::CancelTask(task));
            }
            cmds.push(notify(state, ToastKind::Success, "User disconnected"));
            cmds
        }

        SessionMsg::Restored(session) => {
            if let Some(session) = session {
                log::info!("Restored wallet session for {}", session.address);
                state.session.set(session);
            }
            vec![]
        }

        SessionMsg::Connected {
            task,
            session,
            already_authenticated,
        } => {
            if !finish_task(state, task) {
                log::info!("Ignoring connect result of finished {task}");
                return vec![];
            }
            state.session.set(session);
            let message = if already_authenticated {
                "Already authenticated"
            } else {
                "Wallet connected successfully!"
            };
            vec![notify(state, ToastKind::Success, message)]
        }

        SessionMsg::ConnectFailed { task, error } => {
            if !finish_task(state, task) {
                return vec![];
            }
            vec![
                Cmd::LogError {
                    message: format!("Wallet connection failed: {error}"),
                },
                notify(state, ToastKind::Error, "Wallet connection failed"),
            ]
        }

        SessionMsg::RequestAccountDetails => match require_session(state) {
            Ok(()) => vec![Cmd::FetchAccountDetails],
            Err(cmd) => vec![cmd],
        },

        SessionMsg::AccountDetails {
            address,
            public_key,
        } => {
            let public_key = public_key.unwrap_or_else(|| "unknown".to_string());
            let details = format!("Address: {address} | Public key: {public_key}");
            set_status(state, details.clone());
            vec![Cmd::LogInfo {
                message: format!("Account details: {details}"),
            }]
        }

        SessionMsg::AccountDetailsFailed(error) => {
            vec![notify(
                state,
                ToastKind::Error,
                format!("Could not load account details: {error}"),
            )]
        }
    }
}

fn update_forum(msg: ForumMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        ForumMsg::RewardSelected => match state.forum.selected_post() {
            Some(post) => {
                let id = post.id;
                update_forum(ForumMsg::RewardPost(id), state)
            }
            None => {
                set_status(state, "No post selected for reward");
                vec![]
            }
        },

        ForumMsg::RewardPost(post_id) => {
            if let Err(cmd) = require_session(state) {
                return vec![cmd];
            }
            let Some(post) = state.forum.store.get(post_id) else {
                let message = ForumError::NotFound(post_id).user_message();
                return vec![notify(state, ToastKind::Error, message)];
            };
            if post.rewarded {
                set_status(state, "Post already rewarded");
                return vec![];
            }
            let kind = TaskKind::Reward(post_id);
            let Some(task) = state.tasks.begin(kind) else {
                set_status(state, kind.busy_message());
                return vec![];
            };
            let forum = &state.config.config.forum;
            vec![Cmd::SubmitReward {
                task,
                post_id,
                amount: forum.reward_amount,
                delay_ms: forum.reward_delay_ms,
            }]
        }

        ForumMsg::DeselectPost => {
            state.system.status_message = None;
            state.forum.update(ForumMsg::DeselectPost)
        }

        ForumMsg::PostSubmitted { task, draft } => complete_post(task, draft, state),

        ForumMsg::RewardSettled {
            task,
            post_id,
            amount,
        } => complete_reward(task, post_id, amount, state),

        other => state.forum.update(other),
    }
}

fn complete_post(task: TaskId, draft: PostDraft, state: &mut AppState) -> Vec<Cmd> {
    if !finish_task(state, task) {
        log::info!("Ignoring post submission of finished {task}");
        return vec![];
    }
    let result = state.forum.store.create(
        &draft.title,
        &draft.body,
        draft.category,
        state.session.current(),
    );
    match result {
        Ok(post) => {
            log::info!("Created post #{} by {}", post.id, post.author_address);
            state.forum.on_post_inserted(&post);
            if let Some(session) = state.session.current_mut() {
                session.record_post();
            }
            state.ui.compose = None;
            vec![notify(state, ToastKind::Success, "Post created successfully!")]
        }
        Err(e) => vec![notify(state, ToastKind::Error, e.user_message())],
    }
}

fn complete_reward(task: TaskId, post_id: u64, amount: u64, state: &mut AppState) -> Vec<Cmd> {
    if !finish_task(state, task) {
        log::info!("Ignoring reward of finished {task}");
        return vec![];
    }
    if let Err(cmd) = require_session(state) {
        return vec![cmd];
    }
    let author = match state.forum.store.reward(post_id, amount) {
        Ok(post) => post.author_name.clone(),
        Err(e) => return vec![notify(state, ToastKind::Error, e.user_message())],
    };
    if let Some(session) = state.session.current_mut() {
        session.spend(amount);
    }
    vec![notify(
        state,
        ToastKind::Success,
        format!("Rewarded {author} with {amount} {TOKEN_SYMBOL} tokens!"),
    )]
}

fn update_ui(msg: UiMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match msg {
        UiMsg::ShowCompose => match require_session(state) {
            Ok(()) => state.ui.update(UiMsg::ShowCompose),
            Err(cmd) => vec![cmd],
        },

        UiMsg::CancelCompose => {
            let mut cmds = state.ui.update(UiMsg::CancelCompose);
            if let Some(task) = state.tasks.pending_id(TaskKind::CreatePost) {
                state.tasks.finish(task);
                cmds.push(Cmd::CancelTask(task));
            }
            cmds
        }

        UiMsg::SubmitCompose => submit_compose(state),

        // Notices belong to the section they were raised in
        UiMsg::Navigate(_) | UiMsg::NextSection | UiMsg::Explore => {
            state.system.status_message = None;
            state.ui.update(msg)
        }

        UiMsg::ProcessComposeInput(key) => {
            process_compose_input(key, state, ctx);
            vec![]
        }

        other => state.ui.update(other),
    }
}

fn submit_compose(state: &mut AppState) -> Vec<Cmd> {
    let Some(form) = &state.ui.compose else {
        return vec![];
    };
    let draft = form.to_draft();
    if !draft.is_complete() {
        return vec![notify(state, ToastKind::Error, "Please fill in all fields!")];
    }
    if let Err(cmd) = require_session(state) {
        return vec![cmd];
    }
    let Some(task) = state.tasks.begin(TaskKind::CreatePost) else {
        set_status(state, TaskKind::CreatePost.busy_message());
        return vec![];
    };
    vec![Cmd::SubmitPost {
        task,
        draft,
        delay_ms: state.config.config.forum.create_delay_ms,
    }]
}

fn process_compose_input(key: KeyEvent, state: &mut AppState, ctx: &UpdateContext<'_>) {
    if state.tasks.is_pending(TaskKind::CreatePost) {
        return;
    }
    let Some(form) = &mut state.ui.compose else {
        return;
    };
    if form.focus == ComposeField::Category {
        match key.code {
            KeyCode::Left | KeyCode::Up => form.category = form.category.prev(),
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                form.category = form.category.next()
            }
            _ => {}
        }
        return;
    }
    let single_line = form.focus == ComposeField::Title;
    if let Some(field) = form.focused_text_mut() {
        *field = if single_line {
            ctx.text_area.apply_keys_single_line(field, &[key])
        } else {
            ctx.text_area.apply_keys(field, &[key])
        };
    }
}

fn cancel_all_tasks(state: &mut AppState) -> Vec<Cmd> {
    let tasks = state.tasks.drain();
    if tasks.is_empty() {
        return vec![];
    }
    state.system.status_message = None;
    let mut cmds: Vec<Cmd> = tasks.into_iter().map(Cmd::CancelTask).collect();
    cmds.push(notify(state, ToastKind::Error, "Action cancelled"));
    cmds
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::state::ui::{Section, TextAreaState},
        domain::{forum::Category, session::Session, ui::CursorPosition},
        infrastructure::config::Config,
    };

    fn test_session(address: &str, name: &str) -> Session {
        Session::new(address, name).with_balance(1000)
    }

    fn create_test_state() -> AppState {
        AppState::new_with_config(Config::default())
    }

    fn connected_state() -> AppState {
        let mut state = create_test_state();
        state.session.set(test_session("ST1TESTER", "tester"));
        state
    }

    fn text(content: &str) -> TextAreaState {
        TextAreaState::new(content.into(), CursorPosition::end_of(content), None)
    }

    fn open_compose(state: AppState, title: &str, body: &str) -> AppState {
        let (mut state, _) = update(Msg::Ui(UiMsg::ShowCompose), state);
        if let Some(form) = &mut state.ui.compose {
            form.title = text(title);
            form.body = text(body);
        }
        state
    }

    fn single_task(cmds: &[Cmd]) -> TaskId {
        match cmds {
            [Cmd::SubmitPost { task, .. }]
            | [Cmd::SubmitReward { task, .. }]
            | [Cmd::ConnectWallet { task }] => *task,
            other => panic!("expected one task command, got {other:?}"),
        }
    }

    fn toast_messages(state: &AppState) -> Vec<String> {
        state
            .notifications
            .toasts()
            .map(|t| t.message.clone())
            .collect()
    }

    #[test]
    fn test_update_quit() {
        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), create_test_state());
        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_connect_starts_task_and_shows_loading() {
        let (state, cmds) = update(Msg::Session(SessionMsg::Connect), create_test_state());
        single_task(&cmds);
        assert_eq!(state.loading_message(), Some("Connecting wallet..."));
    }

    #[test]
    fn test_connect_twice_while_pending_is_guarded() {
        let (state, _) = update(Msg::Session(SessionMsg::Connect), create_test_state());
        let (state, cmds) = update(Msg::Session(SessionMsg::Connect), state);
        assert!(cmds.is_empty());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Wallet connection already in progress")
        );
    }

    #[test]
    fn test_connect_when_connected_is_noop_notice() {
        let state = connected_state();
        let before = state.session.current().cloned();
        let (state, cmds) = update(Msg::Session(SessionMsg::Connect), state);

        assert_eq!(state.session.current().cloned(), before);
        assert!(matches!(cmds.as_slice(), [Cmd::ScheduleToastDismiss { .. }]));
        assert_eq!(toast_messages(&state), vec!["Already connected"]);
        assert!(state.tasks.is_idle());
    }

    #[test]
    fn test_connected_result_sets_session() {
        let (state, cmds) = update(Msg::Session(SessionMsg::Connect), create_test_state());
        let task = single_task(&cmds);
        let (state, _) = update(
            Msg::Session(SessionMsg::Connected {
                task,
                session: test_session("ST1NEW", "new"),
                already_authenticated: false,
            }),
            state,
        );
        assert_eq!(state.session.address(), Some("ST1NEW"));
        assert_eq!(state.loading_message(), None);
        assert_eq!(toast_messages(&state), vec!["Wallet connected successfully!"]);
    }

    #[test]
    fn test_connect_failure_is_recoverable() {
        let (state, cmds) = update(Msg::Session(SessionMsg::Connect), create_test_state());
        let task = single_task(&cmds);
        let (state, _) = update(
            Msg::Session(SessionMsg::ConnectFailed {
                task,
                error: "request rejected by wallet".into(),
            }),
            state,
        );
        assert!(!state.is_connected());
        assert!(!state.system.should_quit);
        assert_eq!(state.loading_message(), None);
        assert_eq!(toast_messages(&state), vec!["Wallet connection failed"]);
    }

    #[test]
    fn test_disconnect_keeps_history() {
        let state = connected_state();
        let state = open_compose(state, "Mine", "body");
        let (state, cmds) = update(Msg::Ui(UiMsg::SubmitCompose), state);
        let task = single_task(&cmds);
        let draft = state.ui.compose.as_ref().map(|f| f.to_draft()).unwrap_or_default();
        let (state, _) = update(Msg::Forum(ForumMsg::PostSubmitted { task, draft }), state);

        let (state, cmds) = update(Msg::Session(SessionMsg::Disconnect), state);
        assert!(!state.is_connected());
        assert_eq!(cmds.first(), Some(&Cmd::DisconnectWallet));

        let titles: Vec<_> = state
            .forum
            .store
            .list_by_author("ST1TESTER")
            .map(|p| p.title.clone())
            .collect();
        assert_eq!(titles, vec!["Mine"]);
    }

    #[test]
    fn test_toggle_wallet() {
        let (state, cmds) = update(Msg::Session(SessionMsg::ToggleWallet), create_test_state());
        single_task(&cmds);

        let (state, cmds) = update(Msg::Session(SessionMsg::ToggleWallet), {
            let mut s = state;
            s.session.set(test_session("ST1", "a"));
            s
        });
        assert!(!state.is_connected());
        assert_eq!(cmds.first(), Some(&Cmd::DisconnectWallet));
    }

    #[test]
    fn test_create_and_reward_scenario() {
        let state = open_compose(connected_state(), "T", "B");
        let (state, cmds) = update(Msg::Ui(UiMsg::SubmitCompose), state);
        let task = single_task(&cmds);
        assert_eq!(state.loading_message(), Some("Creating post..."));

        let (state, _) = update(
            Msg::Forum(ForumMsg::PostSubmitted {
                task,
                draft: PostDraft::new("T", "B", Category::General),
            }),
            state,
        );
        let first = &state.forum.store.list_all()[0];
        assert_eq!(first.title, "T");
        assert!(!first.rewarded);
        assert!(!state.ui.is_composing());
        assert_eq!(state.session.current().map(|s| s.posts_created), Some(1));
        let new_id = first.id;

        let (state, cmds) = update(Msg::Forum(ForumMsg::RewardPost(new_id)), state);
        let task = single_task(&cmds);
        assert_eq!(
            cmds[0],
            Cmd::SubmitReward {
                task,
                post_id: new_id,
                amount: 50,
                delay_ms: 2000
            }
        );
        let (state, _) = update(
            Msg::Forum(ForumMsg::RewardSettled {
                task,
                post_id: new_id,
                amount: 50,
            }),
            state,
        );
        let post = state.forum.store.get(new_id).cloned();
        assert_eq!(post.as_ref().map(|p| p.reward_total), Some(50));
        assert_eq!(post.as_ref().map(|p| p.rewarded), Some(true));
        assert_eq!(state.session.current().map(|s| s.balance), Some(950));
        assert_eq!(
            toast_messages(&state).last().map(String::as_str),
            Some("Rewarded tester with 50 FORUM tokens!")
        );
    }

    #[test]
    fn test_submit_requires_fields() {
        let state = open_compose(connected_state(), "  ", "B");
        let before = state.forum.store.clone();
        let (state, cmds) = update(Msg::Ui(UiMsg::SubmitCompose), state);
        assert!(matches!(cmds.as_slice(), [Cmd::ScheduleToastDismiss { .. }]));
        assert_eq!(toast_messages(&state), vec!["Please fill in all fields!"]);
        assert_eq!(state.forum.store, before);
        assert!(state.ui.is_composing());
    }

    #[test]
    fn test_compose_requires_session() {
        let (state, _) = update(Msg::Ui(UiMsg::ShowCompose), create_test_state());
        assert!(!state.ui.is_composing());
        assert_eq!(toast_messages(&state), vec!["Please connect your wallet first!"]);
    }

    #[test]
    fn test_double_submit_is_guarded() {
        let state = open_compose(connected_state(), "T", "B");
        let (state, first) = update(Msg::Ui(UiMsg::SubmitCompose), state);
        let (state, second) = update(Msg::Ui(UiMsg::SubmitCompose), state);
        single_task(&first);
        assert!(second.is_empty());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Post submission already in progress")
        );
    }

    #[test]
    fn test_submission_after_disconnect_fails_validation() {
        let state = open_compose(connected_state(), "T", "B");
        let (state, cmds) = update(Msg::Ui(UiMsg::SubmitCompose), state);
        let task = single_task(&cmds);
        let (state, _) = update(Msg::Session(SessionMsg::Disconnect), state);
        let before = state.forum.store.clone();
        let (state, _) = update(
            Msg::Forum(ForumMsg::PostSubmitted {
                task,
                draft: PostDraft::new("T", "B", Category::General),
            }),
            state,
        );
        assert_eq!(state.forum.store, before);
        assert_eq!(
            toast_messages(&state).last().map(String::as_str),
            Some("Please connect your wallet first!")
        );
    }

    #[test]
    fn test_cancel_compose_cancels_pending_submission() {
        let state = open_compose(connected_state(), "T", "B");
        let (state, cmds) = update(Msg::Ui(UiMsg::SubmitCompose), state);
        let task = single_task(&cmds);

        let (state, cmds) = update(Msg::Ui(UiMsg::CancelCompose), state);
        assert_eq!(cmds, vec![Cmd::CancelTask(task)]);
        assert!(state.tasks.is_idle());

        let before = state.forum.store.clone();
        let (state, cmds) = update(
            Msg::Forum(ForumMsg::PostSubmitted {
                task,
                draft: PostDraft::new("T", "B", Category::General),
            }),
            state,
        );
        assert!(cmds.is_empty());
        assert_eq!(state.forum.store, before);
    }

    #[test]
    fn test_cancel_all() {
        let (state, _) = update(Msg::Session(SessionMsg::Connect), create_test_state());
        let (state, cmds) = update(Msg::Task(TaskMsg::CancelAll), state);
        assert!(matches!(
            cmds.as_slice(),
            [Cmd::CancelTask(_), Cmd::ScheduleToastDismiss { .. }]
        ));
        assert_eq!(state.loading_message(), None);
        assert_eq!(toast_messages(&state), vec!["Action cancelled"]);

        let (_, cmds) = update(Msg::Task(TaskMsg::CancelAll), state);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_reward_rewarded_post_is_hidden() {
        let state = connected_state();
        let (state, cmds) = update(Msg::Forum(ForumMsg::RewardPost(1)), state);
        assert!(cmds.is_empty());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Post already rewarded")
        );
    }

    #[test]
    fn test_deselect_clears_status_notice() {
        let (state, _) = update(Msg::Forum(ForumMsg::RewardPost(1)), connected_state());
        assert!(state.system.status_message.is_some());
        let (state, cmds) = update(Msg::Forum(ForumMsg::DeselectPost), state);
        assert!(cmds.is_empty());
        assert_eq!(state.system.status_message, None);
    }

    #[test]
    fn test_navigation_clears_status_notice() {
        let (state, _) = update(Msg::Forum(ForumMsg::RewardSelected), connected_state());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("No post selected for reward")
        );
        let (state, _) = update(Msg::Ui(UiMsg::Navigate(Section::Profile)), state);
        assert_eq!(state.system.status_message, None);
        assert_eq!(state.ui.section, Section::Profile);
    }

    #[test]
    fn test_task_completion_clears_busy_notice() {
        let (state, cmds) = update(Msg::Forum(ForumMsg::RewardPost(3)), connected_state());
        let task = single_task(&cmds);
        let (state, _) = update(Msg::Forum(ForumMsg::RewardPost(3)), state);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Reward already in progress")
        );
        let (state, _) = update(
            Msg::Forum(ForumMsg::RewardSettled {
                task,
                post_id: 3,
                amount: 50,
            }),
            state,
        );
        assert_eq!(state.system.status_message, None);
    }

    #[test]
    fn test_disconnect_cancels_pending_connect() {
        let (state, cmds) = update(Msg::Session(SessionMsg::Connect), create_test_state());
        let task = single_task(&cmds);
        let (state, _) = update(
            Msg::Session(SessionMsg::Restored(Some(test_session("ST1R", "r")))),
            state,
        );

        let (state, cmds) = update(Msg::Session(SessionMsg::Disconnect), state);
        assert!(matches!(
            cmds.as_slice(),
            [Cmd::DisconnectWallet, Cmd::CancelTask(t), Cmd::ScheduleToastDismiss { .. }] if *t == task
        ));
        assert!(state.tasks.is_idle());

        // The late provider answer no longer reconnects
        let (state, cmds) = update(
            Msg::Session(SessionMsg::Connected {
                task,
                session: test_session("ST1R", "r"),
                already_authenticated: false,
            }),
            state,
        );
        assert!(cmds.is_empty());
        assert!(!state.is_connected());
    }

    #[test]
    fn test_reward_unknown_post() {
        let state = connected_state();
        let (state, _) = update(Msg::Forum(ForumMsg::RewardPost(42)), state);
        assert_eq!(toast_messages(&state), vec!["Post #42 no longer exists"]);
        assert!(state.tasks.is_idle());
    }

    #[test]
    fn test_reward_requires_session() {
        let (state, cmds) = update(Msg::Forum(ForumMsg::RewardPost(3)), create_test_state());
        assert!(matches!(cmds.as_slice(), [Cmd::ScheduleToastDismiss { .. }]));
        assert_eq!(state.forum.store.get(3).map(|p| p.reward_total), Some(0));
    }

    #[test]
    fn test_reward_selected() {
        let mut state = connected_state();
        state.forum.update(ForumMsg::ScrollToBottom);
        let (_, cmds) = update(Msg::Forum(ForumMsg::RewardSelected), state);
        assert!(matches!(
            cmds.as_slice(),
            [Cmd::SubmitReward { post_id: 3, .. }]
        ));
    }

    #[test]
    fn test_dismiss_notification() {
        let (state, cmds) = update(
            Msg::Notification(NotificationMsg::Push {
                kind: ToastKind::Success,
                message: "hi".into(),
            }),
            create_test_state(),
        );
        let Some(Cmd::ScheduleToastDismiss { id, after_ms }) = cmds.first().cloned() else {
            panic!("expected a dismiss timer");
        };
        assert_eq!(after_ms, 3000);
        let (state, _) = update(Msg::Notification(NotificationMsg::Dismiss(id)), state);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_category_field_cycles_with_arrows() {
        let (mut state, _) = update(Msg::Ui(UiMsg::ShowCompose), connected_state());
        if let Some(form) = &mut state.ui.compose {
            form.focus = ComposeField::Category;
        }
        let right = KeyEvent::from(KeyCode::Right);
        let (state, _) = update(Msg::Ui(UiMsg::ProcessComposeInput(right)), state);
        assert_eq!(
            state.ui.compose.as_ref().map(|f| f.category),
            Some(Category::Technology)
        );
        let left = KeyEvent::from(KeyCode::Left);
        let (state, _) = update(Msg::Ui(UiMsg::ProcessComposeInput(left)), state);
        let (state, _) = update(Msg::Ui(UiMsg::ProcessComposeInput(left)), state);
        assert_eq!(
            state.ui.compose.as_ref().map(|f| f.category),
            Some(Category::Announcements)
        );
    }

    #[test]
    fn test_restored_session() {
        let (state, cmds) = update(
            Msg::Session(SessionMsg::Restored(Some(test_session("ST1R", "r")))),
            create_test_state(),
        );
        assert!(cmds.is_empty());
        assert_eq!(state.session.address(), Some("ST1R"));

        let (state, _) = update(Msg::Session(SessionMsg::Restored(None)), state);
        assert!(state.is_connected());
    }

    #[test]
    fn test_account_details_status() {
        let (state, cmds) = update(
            Msg::Session(SessionMsg::RequestAccountDetails),
            connected_state(),
        );
        assert_eq!(cmds, vec![Cmd::FetchAccountDetails]);
        let (state, cmds) = update(
            Msg::Session(SessionMsg::AccountDetails {
                address: "ST1TESTER".into(),
                public_key: Some("02ab".into()),
            }),
            state,
        );
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Address: ST1TESTER | Public key: 02ab")
        );
        assert_eq!(
            cmds,
            vec![Cmd::LogInfo {
                message: "Account details: Address: ST1TESTER | Public key: 02ab".into()
            }]
        );
    }
}
