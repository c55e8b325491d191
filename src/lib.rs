//! Terminal user interface for browsing team projects.
//!
//! The project list screen shows a fixed catalog of team projects with
//! status filter chips, summary statistics, and per-project cards; opening a
//! card navigates to a detail view.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;
