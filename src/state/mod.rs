//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all screen data
//! - Status filter types for the chip bar
//! - Navigation types (views and their route paths)
//! - State error handling

mod error;
mod filter;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use filter::StatusFilter;
pub use navigation::View;
pub use state_impl::State;
