//! OpenAI-compatible completion adapter
//!
//! Implements [`CompletionGateway`](consult_application::CompletionGateway)
//! over the Chat Completions HTTP API.

pub mod error;
pub mod gateway;
pub mod protocol;
