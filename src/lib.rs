//! EventMark Library
//!
//! This library provides core functionality for the EventMark application:
//! loading a static events-page export, keeping favorites in sync with a
//! local store, deriving the favorites-only filtered view, and the
//! terminal UI around them.

// Module declarations
pub mod config;
pub mod constants;
pub mod favorites;
pub mod filter;
pub mod models;
pub mod shortcuts;
pub mod tui;
