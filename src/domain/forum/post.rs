use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// A forum post record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub category: Category,
    pub author_name: String,
    /// Address of the session that created the post
    pub author_address: String,
    pub created_at: DateTime<Utc>,
    pub like_count: u32,
    pub comment_count: u32,
    pub reward_total: u64,
    pub rewarded: bool,
}

impl Post {
    /// First character of the author's name, used as an avatar
    pub fn author_initial(&self) -> char {
        self.author_name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }

    pub fn is_authored_by(&self, address: &str) -> bool {
        self.author_address == address
    }

    pub(super) fn add_reward(&mut self, amount: u64) {
        self.reward_total = self.reward_total.saturating_add(amount);
        if self.reward_total > 0 {
            self.rewarded = true;
        }
    }
}

/// Fields collected by the compose form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub category: Category,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            category,
        }
    }

    /// Both required fields hold something other than whitespace
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }
}
