//! Rethread content server.
//!
//! - [`kernel`] - Content sources (Drupal, cache, test doubles)
//! - [`server`] - HTTP routes and app wiring
//! - [`common`] - Auth context and navigation

pub mod common;
pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
