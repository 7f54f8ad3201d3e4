//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Identity provider and session storage

pub mod cli;
pub mod config;
pub mod identity;
pub mod storage;
pub mod tui;
