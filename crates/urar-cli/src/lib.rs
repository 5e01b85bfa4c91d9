//! CLI library components for the URAR compliance validator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
