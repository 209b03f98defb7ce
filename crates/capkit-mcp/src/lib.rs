//! # capkit-mcp
//!
//! MCP (Model Context Protocol) server over the capkit capability registry.
//!
//! Exposes the demo tools over an rmcp stdio transport:
//! - `spotlight`: Greet a user by name
//! - `summarize`: First-sentence summary of a text
//! - `word_count`: Count words in a text
//!
//! The service is a thin bridge: every call dispatches through
//! [`capkit_core::CapabilityRegistry::invoke_tool`].

pub mod tools;

pub use tools::CapkitService;
