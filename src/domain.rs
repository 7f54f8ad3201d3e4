//! Domain logic
//!
//! This module contains the forum's business rules:
//! - Post Store and post records
//! - Wallet session
//! - Notifications
//! - Text processing utilities

pub mod error;
pub mod forum;
pub mod notification;
pub mod session;
pub mod text;
pub mod ui;
