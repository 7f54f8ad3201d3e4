//! UI configuration
//!
//! This module contains configuration for UI appearance and behavior.

pub mod keybindings;
pub mod styles;

// Re-export for convenience
pub use keybindings::{hint_for, Action, KeyBindings};
pub use styles::Styles;
