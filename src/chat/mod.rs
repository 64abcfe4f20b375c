//! Hosted chat-completion client used for answer evaluation.

pub mod client;

pub use client::{ChatCompleter, GroqChatClient, MockChatCompleter};
