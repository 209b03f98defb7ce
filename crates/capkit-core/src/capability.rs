//! Capability — the unit of registration in the registry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::{PromptMessage, ResourceContent};
use crate::error::RegistryError;
use crate::uri::UriTemplate;

/// Arguments passed to tool and prompt handlers, keyed by parameter name.
pub type CapabilityArgs = serde_json::Map<String, serde_json::Value>;

/// Handler for a named tool. Returns a JSON value so callers can pass the
/// result through unchanged.
pub type ToolFn =
    Box<dyn Fn(&CapabilityArgs) -> Result<serde_json::Value, RegistryError> + Send + Sync>;

/// Handler for a static resource. Takes no arguments.
pub type ResourceFn = Box<dyn Fn() -> ResourceContent + Send + Sync>;

/// Handler for a templated resource. Receives the captured placeholder value.
pub type TemplateResourceFn = Box<dyn Fn(&str) -> ResourceContent + Send + Sync>;

/// Handler for a named prompt. Returns the conversation script in order.
pub type PromptFn =
    Box<dyn Fn(&CapabilityArgs) -> Result<Vec<PromptMessage>, RegistryError> + Send + Sync>;

/// The three MCP capability kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    Tool,
    Resource,
    Prompt,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CapabilityKind::Tool => "tool",
            CapabilityKind::Resource => "resource",
            CapabilityKind::Prompt => "prompt",
        };
        write!(f, "{s}")
    }
}

/// The handler half of a capability, tagged by kind.
///
/// Resources come in two flavors: static (exact URI) and templated
/// (URI with one placeholder, parsed at registration).
pub enum Handler {
    Tool(ToolFn),
    StaticResource(ResourceFn),
    TemplateResource(UriTemplate, TemplateResourceFn),
    Prompt(PromptFn),
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Tool(_) => write!(f, "Handler::Tool"),
            Handler::StaticResource(_) => write!(f, "Handler::StaticResource"),
            Handler::TemplateResource(t, _) => {
                write!(f, "Handler::TemplateResource({})", t.raw())
            }
            Handler::Prompt(_) => write!(f, "Handler::Prompt"),
        }
    }
}

/// A registered capability: identity, metadata, and handler.
///
/// Created once during registration and immutable afterward. Tools and
/// prompts are identified by name; resources by URI or URI template.
#[derive(Debug)]
pub struct Capability {
    pub kind: CapabilityKind,
    pub identifier: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub(crate) handler: Handler,
}

impl Capability {
    pub(crate) fn new(
        kind: CapabilityKind,
        identifier: impl Into<String>,
        title: Option<&str>,
        description: Option<&str>,
        handler: Handler,
    ) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            handler,
        }
    }
}
