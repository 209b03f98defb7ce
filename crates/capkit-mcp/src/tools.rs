//! MCP tool definitions bridging rmcp to the capability registry.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use serde::Deserialize;
use tracing::debug;

use capkit_core::{CapabilityArgs, CapabilityRegistry};

/// MCP server exposing registry tools over rmcp.
#[derive(Debug, Clone)]
pub struct CapkitService {
    registry: Arc<CapabilityRegistry>,
    tool_router: ToolRouter<Self>,
}

impl CapkitService {
    /// Create a service over an already populated registry.
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self {
            registry,
            tool_router: Self::tool_router(),
        }
    }

    /// Dispatch a tool call through the registry and stringify the result.
    /// Failures come back in the `{"error": "..."}` shape.
    fn dispatch(&self, name: &str, args: CapabilityArgs) -> String {
        debug!(tool = name, "mcp tool call");
        match self.registry.invoke_tool(name, &args) {
            Ok(serde_json::Value::String(s)) => s,
            Ok(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
            }
            Err(e) => format!("{{\"error\": \"{e}\"}}"),
        }
    }
}

fn string_args(key: &str, value: String) -> CapabilityArgs {
    let mut args = CapabilityArgs::new();
    args.insert(key.to_string(), serde_json::Value::String(value));
    args
}

// === Tool request types ===

/// Request for the greeter tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SpotlightRequest {
    /// Name to greet
    pub name: String,
}

/// Request for the summarizer tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SummarizeRequest {
    /// Text to reduce to its first sentence
    pub text: String,
}

/// Request for the word counter tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WordCountRequest {
    /// Text whose words should be counted
    pub text: String,
}

#[tool_router]
impl CapkitService {
    /// Greet a user by name.
    #[tool(description = "Greet a user by name, demonstrating basic tool wiring")]
    fn spotlight(&self, Parameters(req): Parameters<SpotlightRequest>) -> String {
        self.dispatch("spotlight", string_args("name", req.name))
    }

    /// First-sentence summary of a text.
    #[tool(description = "Return a naive first-sentence summary of the given text")]
    fn summarize(&self, Parameters(req): Parameters<SummarizeRequest>) -> String {
        self.dispatch("summarize", string_args("text", req.text))
    }

    /// Count words in a text.
    #[tool(description = "Count whitespace-separated words in the given text")]
    fn word_count(&self, Parameters(req): Parameters<WordCountRequest>) -> String {
        self.dispatch("word_count", string_args("text", req.text))
    }
}

#[tool_handler]
impl ServerHandler for CapkitService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "capkit demo server. Greet users with `spotlight`, reduce text to a \
                 first-sentence summary with `summarize`, and measure payloads with \
                 `word_count`."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
