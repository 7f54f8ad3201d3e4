//! Forum posts and the in-memory Post Store

pub mod category;
pub mod post;
pub mod seed;
pub mod store;

pub use category::{Category, CategoryFilter};
pub use post::{Post, PostDraft};
pub use store::{Aggregate, PostStore};

/// Mock token amount granted by a single reward
pub const DEFAULT_REWARD_AMOUNT: u64 = 50;

/// Token ticker shown next to reward totals
pub const TOKEN_SYMBOL: &str = "FORUM";
