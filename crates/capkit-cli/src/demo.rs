//! The scripted demo driver.
//!
//! Runs a fixed sequence — scripted chat, resource resolutions, prompt
//! retrieval, tool invocations — and prints each section to stdout. Any
//! handler failure propagates to `main` and terminates the process.

use anyhow::Result;
use serde_json::json;

use capkit_core::{CapabilityArgs, CapabilityRegistry, ChatTemplate, PromptMessage};
use capkit_demo::{ORIENTATION_PROMPT, PRIMER_URI};

const DEMO_TARGET: &str = "MCP explorer";

/// Run the full demo script against a populated registry.
pub fn run(registry: &CapabilityRegistry) -> Result<()> {
    println!("Hello from the MCP demo!");
    println!("\n--- Scripted chat ---");
    println!("{}", render_scripted_chat(DEMO_TARGET)?);
    println!("\n--- MCP resources ---");
    println!("{}", sample_resources(registry)?);
    println!("\n--- MCP prompts ---");
    println!("{}", sample_prompt(registry)?);
    println!("\n--- Tool results ---");
    println!("{}", sample_tool_output(registry, DEMO_TARGET)?);
    Ok(())
}

/// Render a short scripted conversation through the chat template engine.
fn render_scripted_chat(name: &str) -> Result<String> {
    let template = ChatTemplate::from_messages([
        ("system", "You introduce the Model Context Protocol to new users."),
        ("human", "Greet {name} and mention MCP."),
    ]);
    let messages = template.format_messages(&[("name", name)])?;
    Ok(format_messages(&messages))
}

/// Resolve the two demo resources and label their contents.
fn sample_resources(registry: &CapabilityRegistry) -> Result<String> {
    let primer = registry.resolve_resource(PRIMER_URI)?.to_text();
    let deep_dive = registry
        .resolve_resource("resource://mcp/resources/tools")?
        .to_text();
    Ok(format!(
        "Primer -> {primer}\nDeep dive (tools) -> {deep_dive}"
    ))
}

/// Fetch the orientation prompt so humans can see the template.
fn sample_prompt(registry: &CapabilityRegistry) -> Result<String> {
    let args = string_args(&[("project", "Demo Workspace")]);
    let messages = registry.get_prompt(ORIENTATION_PROMPT, &args)?;
    Ok(format_messages(&messages))
}

/// Invoke each demo tool once and label the results.
fn sample_tool_output(registry: &CapabilityRegistry, target: &str) -> Result<String> {
    let calls = [
        ("spotlight", "name", target),
        (
            "summarize",
            "text",
            "Prompt templates orchestrate context while MCP standardizes tooling.",
        ),
        (
            "word_count",
            "text",
            "The demo server keeps rapid prototyping inside a single process",
        ),
    ];

    let mut lines = Vec::with_capacity(calls.len());
    for (name, key, value) in calls {
        let result = registry.invoke_tool(name, &string_args(&[(key, value)]))?;
        lines.push(format!("{name}: {}", format_value(&result)));
    }
    Ok(lines.join("\n"))
}

fn format_messages(messages: &[PromptMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role.title_case(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_args(pairs: &[(&str, &str)]) -> CapabilityArgs {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect()
}
