use crate::infrastructure::config::Config;

pub mod forum;
pub mod notification;
pub mod session;
pub mod system;
pub mod task;
pub mod ui;

pub use forum::ForumState;
pub use notification::NotificationState;
pub use session::SessionState;
pub use system::SystemState;
pub use task::TaskState;
pub use ui::UiState;

/// Unified application state.
/// Owned by the runtime and only changed through `update`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub forum: ForumState,
    pub session: SessionState,
    pub ui: UiState,
    pub system: SystemState,
    pub notifications: NotificationState,
    pub tasks: TaskState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given config, seeding the board when enabled
    pub fn new_with_config(config: Config) -> Self {
        let forum = if config.forum.seed_mock_posts {
            ForumState::seeded()
        } else {
            ForumState::default()
        };
        Self {
            forum,
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_connected()
    }

    /// Message of the loading overlay, present while an action is in flight
    pub fn loading_message(&self) -> Option<&str> {
        self.tasks.loading_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.forum.store.is_empty());
        assert!(!state.ui.is_composing());
        assert!(!state.system.should_quit);
        assert!(!state.is_connected());
        assert!(state.loading_message().is_none());
    }

    #[test]
    fn test_new_with_config_seeds_board() {
        let state = AppState::new_with_config(Config::default());
        assert_eq!(state.forum.store.len(), 3);

        let mut config = Config::default();
        config.forum.seed_mock_posts = false;
        let state = AppState::new_with_config(config);
        assert!(state.forum.store.is_empty());
    }
}
