//! CLI subcommand implementations.

pub mod config;
pub mod render;
pub mod session;
