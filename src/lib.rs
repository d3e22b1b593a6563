//! Contacts Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod contacts;
pub mod error;
/// Application state management
///
/// Holds the storage handle shared by all handlers.
pub mod state;
