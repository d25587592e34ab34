//! Command implementations for the CLI

pub mod clean;
pub mod generate;
pub mod list;
pub mod render;
