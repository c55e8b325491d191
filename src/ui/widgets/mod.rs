//! Reusable UI widget components.
//!
//! This module contains reusable widget components such as progress bars,
//! tag chips, and styling utilities.

pub mod bars;
pub mod styling;
