//! # ThinkBucks - token-rewarded forum in the terminal
//!
//! Members connect a wallet, write posts in a handful of categories and
//! reward each other's posts with FORUM tokens. Built with Ratatui around an
//! Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **State** (`core::state`): the whole application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects run by `core::cmd_executor`
//! - **View** (`presentation::components`): rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use thinkbucks::core::{
//!     msg::{ui::UiMsg, Msg},
//!     state::{ui::Section, AppState},
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Ui(UiMsg::Navigate(Section::Forum)), state);
//!
//! assert_eq!(state.ui.section, Section::Forum);
//! assert!(commands.is_empty());
//!
//! // Composing needs a connected wallet; the refusal shows up as a toast
//! let (state, commands) = update(Msg::Ui(UiMsg::ShowCompose), state);
//! assert!(!state.ui.is_composing());
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, update and commands
//! - [`domain`] - posts, sessions and notifications
//! - [`infrastructure`] - terminal, wallet, storage and configuration
//! - [`integration`] - runtime and event loop
//! - [`presentation`] - components and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
