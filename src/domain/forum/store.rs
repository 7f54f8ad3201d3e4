use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, CategoryFilter, Post};
use crate::domain::{error::ForumError, session::Session};

/// Summary numbers shown in the stats panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Aggregate {
    pub post_count: usize,
    pub total_rewards: u64,
    pub distinct_authors: usize,
}

/// Ordered in-memory collection of posts, newest first.
///
/// Ids are handed out from a counter that always stays above every id in the
/// store, so ids remain unique even when posts are loaded from elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
    next_id: u64,
}

impl Default for PostStore {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
        }
    }
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from posts already in display order.
    /// Posts whose id is already present are skipped.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut store = Self::new();
        for post in posts {
            if store.get(post.id).is_some() {
                log::warn!("Skipping duplicate post id {}", post.id);
                continue;
            }
            store.next_id = store.next_id.max(post.id.saturating_add(1));
            store.posts.push(post);
        }
        store
    }

    /// Validate and insert a new post at the head of the store
    pub fn create(
        &mut self,
        title: &str,
        body: &str,
        category: Category,
        author: Option<&Session>,
    ) -> Result<Post, ForumError> {
        self.create_at(title, body, category, author, Utc::now())
    }

    pub fn create_at(
        &mut self,
        title: &str,
        body: &str,
        category: Category,
        author: Option<&Session>,
        created_at: DateTime<Utc>,
    ) -> Result<Post, ForumError> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() || body.is_empty() {
            return Err(ForumError::validation("Please fill in all fields!"));
        }
        let Some(author) = author else {
            return Err(ForumError::validation("Please connect your wallet first!"));
        };

        let post = Post {
            id: self.next_id,
            title: title.to_string(),
            body: body.to_string(),
            category,
            author_name: author.display_name.clone(),
            author_address: author.address.clone(),
            created_at,
            like_count: 0,
            comment_count: 0,
            reward_total: 0,
            rewarded: false,
        };
        self.next_id += 1;
        self.posts.insert(0, post.clone());
        Ok(post)
    }

    /// Add `amount` to a post's reward total. Repeated rewards accumulate.
    pub fn reward(&mut self, post_id: u64, amount: u64) -> Result<&Post, ForumError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(ForumError::NotFound(post_id))?;
        post.add_reward(amount);
        Ok(post)
    }

    pub fn get(&self, post_id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    pub fn list_all(&self) -> &[Post] {
        &self.posts
    }

    pub fn list_by_author<'a>(&'a self, address: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts.iter().filter(move |p| p.is_authored_by(address))
    }

    pub fn list_by_category(&self, filter: CategoryFilter) -> impl Iterator<Item = &Post> + '_ {
        self.posts.iter().filter(move |p| filter.matches(p.category))
    }

    pub fn aggregate(&self) -> Aggregate {
        let authors: HashSet<&str> = self
            .posts
            .iter()
            .map(|p| p.author_address.as_str())
            .collect();
        Aggregate {
            post_count: self.posts.len(),
            total_rewards: self.posts.iter().map(|p| p.reward_total).sum(),
            distinct_authors: authors.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
