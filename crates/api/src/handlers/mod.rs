//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the repositories in `deckway_db` and map errors via
//! [`crate::error::AppError`].

pub mod global_settings;
pub mod project;
pub mod slide;
pub mod upload;
