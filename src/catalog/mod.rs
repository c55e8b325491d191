//! Project catalog module.
//!
//! This module owns the display source for the project list screen:
//! - Project record types and their status/priority enums
//! - The built-in sample dataset
//! - Aggregate summary statistics over the catalog

mod resource;
mod sample;
mod summary;

pub use resource::{Priority, Project, Status};
pub use sample::sample_projects;
pub use summary::Summary;
