use crate::{
    core::{cmd::Cmd, msg::forum::ForumMsg},
    domain::forum::{seed::seed_posts, CategoryFilter, Post, PostStore},
};

/// Post Store plus the view state of the forum list
#[derive(Debug, Clone, Default)]
pub struct ForumState {
    pub store: PostStore,
    filter: CategoryFilter,
    /// Index into the filtered list
    selected_index: Option<usize>,
}

impl ForumState {
    pub fn seeded() -> Self {
        Self {
            store: PostStore::with_posts(seed_posts()),
            ..Default::default()
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Posts shown in the forum list, in store order
    pub fn visible(&self) -> Vec<&Post> {
        self.store.list_by_category(self.filter).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.store.list_by_category(self.filter).count()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_index
            .and_then(|i| self.store.list_by_category(self.filter).nth(i))
    }

    /// Keep the same post selected after `post` was inserted at the head
    pub fn on_post_inserted(&mut self, post: &Post) {
        if self.filter.matches(post.category) {
            if let Some(i) = self.selected_index {
                self.selected_index = Some(i + 1);
            }
        }
    }

    /// Forum-specific update function for list navigation and filtering.
    /// Post Store actions are coordinated by `core::update`.
    pub fn update(&mut self, msg: ForumMsg) -> Vec<Cmd> {
        let len = self.visible_len();
        match msg {
            ForumMsg::ScrollUp => {
                self.selected_index = match self.selected_index {
                    Some(i) => Some(i.saturating_sub(1)),
                    None if len > 0 => Some(0),
                    None => None,
                };
            }
            ForumMsg::ScrollDown => {
                self.selected_index = match self.selected_index {
                    Some(i) if i + 1 < len => Some(i + 1),
                    Some(i) => Some(i),
                    None if len > 0 => Some(0),
                    None => None,
                };
            }
            ForumMsg::ScrollToTop => {
                if len > 0 {
                    self.selected_index = Some(0);
                }
            }
            ForumMsg::ScrollToBottom => {
                if len > 0 {
                    self.selected_index = Some(len - 1);
                }
            }
            ForumMsg::DeselectPost => {
                self.selected_index = None;
            }
            ForumMsg::NextFilter => self.set_filter(self.filter.next()),
            ForumMsg::PrevFilter => self.set_filter(self.filter.prev()),
            ForumMsg::SetFilter(filter) => self.set_filter(filter),
            ForumMsg::RewardSelected
            | ForumMsg::RewardPost(_)
            | ForumMsg::PostSubmitted { .. }
            | ForumMsg::RewardSettled { .. } => {
                log::warn!("ForumState::update received store action {msg:?}");
            }
        }
        vec![]
    }

    fn set_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.selected_index = None;
        }
    }
}
