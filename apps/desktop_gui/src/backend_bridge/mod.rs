//! Bridge between the UI thread and the async API client.

pub mod commands;
pub mod runtime;
