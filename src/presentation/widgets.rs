//! Reusable UI widgets
//!
//! Widgets are plain data that render into a buffer. Components assemble them
//! from `AppState`.

pub mod filter_bar;
pub mod post_card;
pub mod post_stats;
