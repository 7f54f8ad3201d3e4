use serde::{Deserialize, Serialize};

use crate::{
    core::state::task::TaskId,
    domain::forum::{CategoryFilter, PostDraft},
};

/// Post list navigation and Post Store actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForumMsg {
    // Scroll operations over the visible list
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,

    // Selection operations
    DeselectPost,

    // Client-side filter
    NextFilter,
    PrevFilter,
    SetFilter(CategoryFilter),

    /// Reward the selected post
    RewardSelected,
    RewardPost(u64),

    // Simulated submissions finished
    PostSubmitted {
        task: TaskId,
        draft: PostDraft,
    },
    RewardSettled {
        task: TaskId,
        post_id: u64,
        amount: u64,
    },
}
