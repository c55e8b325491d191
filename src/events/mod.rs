//! Event handling module.
//!
//! This module contains the terminal event handler: user input polling on a
//! dedicated thread, delivered to the render loop over a channel.

pub mod terminal;
