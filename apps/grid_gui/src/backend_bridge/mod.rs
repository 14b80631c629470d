//! Worker thread that runs catalog fetches off the UI thread.

pub mod commands;
pub mod runtime;
