//! Remote completion service access.

pub mod client;

pub use client::{Completer, CompletionClient};
