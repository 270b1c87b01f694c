//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Text generation (OpenAI completions API, plus a fixed-reply mock)
//! - The HTTP and CLI surfaces, wired together by the [`api::Container`]

pub mod adapter;
pub mod api;

pub use adapter::*;
