//! Helper functions for templates and API payloads
//!
//! Formatting helpers shared by the page templates (as Tera filters),
//! the JSON API and the command line.

mod date;
mod money;

pub use date::*;
pub use money::*;
