//! Presentation layer
//!
//! - `presenters`: pure functions from domain data to view models
//! - `view_models`: declarative descriptions of what to show
//! - `views`: ratatui widgets that draw view models
//! - `renderers`: console output and the interactive TUI loop

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
