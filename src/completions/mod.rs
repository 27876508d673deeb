//! Completion calls against the remote model endpoint: the client itself
//! and the lazy chunk sequence returned by streaming calls.

pub mod client;
pub mod stream;

pub use client::GenerationClient;
pub use stream::CompletionStream;
