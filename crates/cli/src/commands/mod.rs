//! CLI subcommand implementations.

pub mod info;
pub mod request;
