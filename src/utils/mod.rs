//! Utility modules shared by the paginator and the CLI.

pub mod slug;
