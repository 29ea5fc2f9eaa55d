//! Command-line components for the shortcuts tool.

pub mod cli;
pub mod commands;
pub mod logging;
