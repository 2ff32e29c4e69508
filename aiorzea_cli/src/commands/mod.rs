//! CLI subcommand implementations.

pub mod call;
pub mod item;
pub mod search;
pub mod sheets;
pub mod tools;
