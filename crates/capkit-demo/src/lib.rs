//! # capkit-demo
//!
//! The demo capability set for capkit: three toy tools, two resources, and
//! one prompt, plus [`demo_registry`] which returns a fully registered
//! [`CapabilityRegistry`].
//!
//! Capabilities:
//! - `spotlight`, `summarize`, `word_count` — tools
//! - `resource://mcp/primer`, `resource://mcp/resources/{capability}` — resources
//! - `orientation` — prompt

pub mod prompts;
pub mod resources;
pub mod tools;

use capkit_core::{require_str, CapabilityArgs, CapabilityRegistry, ResourceContent, Result};
use serde_json::json;

pub use prompts::ORIENTATION_PROMPT;
pub use resources::{CAPABILITY_URI_TEMPLATE, PRIMER_URI};

/// Server name reported over MCP.
pub const SERVER_NAME: &str = "capkit-demo";

/// Build the registry with every demo capability registered.
///
/// Registration happens once at process start; the returned registry is
/// immutable afterward.
///
/// # Errors
///
/// Fails only on registration conflicts, which would be a bug in this
/// fixed capability set.
pub fn demo_registry() -> Result<CapabilityRegistry> {
    let mut registry = CapabilityRegistry::new();

    registry.register_tool(
        "spotlight",
        None,
        Some("Friendly greeter so new users see basic tool wiring"),
        Box::new(|args: &CapabilityArgs| {
            let name = require_str(args, "spotlight", "name")?;
            Ok(json!(tools::spotlight(name)))
        }),
    )?;

    registry.register_tool(
        "summarize",
        None,
        Some("Return a lightweight summary without external dependencies"),
        Box::new(|args: &CapabilityArgs| {
            let text = require_str(args, "summarize", "text")?;
            Ok(json!(tools::summarize(text)))
        }),
    )?;

    registry.register_tool(
        "word_count",
        None,
        Some("Count words so toolchains can inspect payload sizes"),
        Box::new(|args: &CapabilityArgs| {
            let text = require_str(args, "word_count", "text")?;
            Ok(tools::word_count(text))
        }),
    )?;

    registry.register_resource(
        PRIMER_URI,
        Some("Core MCP Concepts"),
        Some("Explains resources, tools, and prompts at a glance"),
        Box::new(|| ResourceContent::text(resources::primer())),
    )?;

    registry.register_resource_template(
        CAPABILITY_URI_TEMPLATE,
        Some("Capability Deep Dive"),
        Some("Explains how to use a specific MCP capability"),
        Box::new(|capability: &str| ResourceContent::text(resources::capability_detail(capability))),
    )?;

    registry.register_prompt(
        ORIENTATION_PROMPT,
        Some("MCP Orientation Prompt"),
        Some("Guides an LLM through verifying MCP resources/tools/prompts"),
        Box::new(|args: &CapabilityArgs| {
            let project = require_str(args, ORIENTATION_PROMPT, "project")?;
            Ok(prompts::orientation(project))
        }),
    )?;

    Ok(registry)
}
