//! The capability registry: registration and dispatch for tools,
//! resources, and prompts.
//!
//! The registry is populated once at process start and immutable afterward.
//! Lookups are by exact identifier for tools and prompts; resource URIs
//! resolve against static identifiers first, then registered URI templates
//! in registration order.

use std::collections::HashMap;

use tracing::debug;

use crate::capability::{
    Capability, CapabilityArgs, CapabilityKind, Handler, PromptFn, ResourceFn, TemplateResourceFn,
    ToolFn,
};
use crate::content::{PromptMessage, ResourceContent};
use crate::error::RegistryError;
use crate::uri::UriTemplate;

/// In-process store mapping `(kind, identifier)` to capabilities.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    entries: HashMap<(CapabilityKind, String), Capability>,
    // Registration order, for iteration and first-match resource resolution.
    order: Vec<(CapabilityKind, String)>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under an exact name.
    ///
    /// # Errors
    ///
    /// [`RegistryError::EmptyIdentifier`] for an empty name,
    /// [`RegistryError::DuplicateCapability`] if the name is taken.
    pub fn register_tool(
        &mut self,
        name: &str,
        title: Option<&str>,
        description: Option<&str>,
        handler: ToolFn,
    ) -> Result<(), RegistryError> {
        self.insert(Capability::new(
            CapabilityKind::Tool,
            name,
            title,
            description,
            Handler::Tool(handler),
        ))
    }

    /// Register a static resource under an exact URI.
    pub fn register_resource(
        &mut self,
        uri: &str,
        title: Option<&str>,
        description: Option<&str>,
        handler: ResourceFn,
    ) -> Result<(), RegistryError> {
        self.insert(Capability::new(
            CapabilityKind::Resource,
            uri,
            title,
            description,
            Handler::StaticResource(handler),
        ))
    }

    /// Register a templated resource. The identifier must contain exactly
    /// one `{placeholder}`; the handler receives the captured value.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidTemplate`] if the template does not parse,
    /// [`RegistryError::OverlappingTemplate`] if an already registered
    /// template has the same literal shape, plus the usual identifier checks.
    pub fn register_resource_template(
        &mut self,
        template: &str,
        title: Option<&str>,
        description: Option<&str>,
        handler: TemplateResourceFn,
    ) -> Result<(), RegistryError> {
        let parsed = UriTemplate::parse(template)?;
        for existing in self.templates() {
            if parsed.same_shape(existing) {
                return Err(RegistryError::OverlappingTemplate {
                    template: template.to_string(),
                    existing: existing.raw().to_string(),
                });
            }
        }
        self.insert(Capability::new(
            CapabilityKind::Resource,
            template,
            title,
            description,
            Handler::TemplateResource(parsed, handler),
        ))
    }

    /// Register a prompt under an exact name.
    pub fn register_prompt(
        &mut self,
        name: &str,
        title: Option<&str>,
        description: Option<&str>,
        handler: PromptFn,
    ) -> Result<(), RegistryError> {
        self.insert(Capability::new(
            CapabilityKind::Prompt,
            name,
            title,
            description,
            Handler::Prompt(handler),
        ))
    }

    fn insert(&mut self, capability: Capability) -> Result<(), RegistryError> {
        if capability.identifier.is_empty() {
            return Err(RegistryError::EmptyIdentifier {
                kind: capability.kind,
            });
        }
        let key = (capability.kind, capability.identifier.clone());
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateCapability {
                kind: capability.kind,
                identifier: capability.identifier,
            });
        }
        debug!(kind = %capability.kind, identifier = %capability.identifier, "registered capability");
        self.order.push(key.clone());
        self.entries.insert(key, capability);
        Ok(())
    }

    /// Invoke a tool by exact name, passing the result through unchanged.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownCapability`] on a lookup miss; handler
    /// errors propagate.
    pub fn invoke_tool(
        &self,
        name: &str,
        args: &CapabilityArgs,
    ) -> Result<serde_json::Value, RegistryError> {
        let capability = self
            .get(CapabilityKind::Tool, name)
            .ok_or_else(|| RegistryError::UnknownCapability {
                kind: CapabilityKind::Tool,
                name: name.to_string(),
            })?;
        match &capability.handler {
            Handler::Tool(handler) => handler(args),
            // Kind and handler variant always agree at registration
            _ => unreachable!("tool capability holds a non-tool handler"),
        }
    }

    /// Resolve a resource URI: exact static match first, then the first
    /// registered template that matches with a non-empty capture.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownResource`] if nothing matches.
    pub fn resolve_resource(&self, uri: &str) -> Result<ResourceContent, RegistryError> {
        if let Some(capability) = self.get(CapabilityKind::Resource, uri) {
            if let Handler::StaticResource(handler) = &capability.handler {
                debug!(uri, "resolved static resource");
                return Ok(handler());
            }
        }

        for capability in self.resources() {
            if let Handler::TemplateResource(template, handler) = &capability.handler {
                if let Some(value) = template.matches(uri) {
                    debug!(uri, template = template.raw(), value, "resolved templated resource");
                    return Ok(handler(value));
                }
            }
        }

        Err(RegistryError::UnknownResource {
            uri: uri.to_string(),
        })
    }

    /// Fetch a prompt by exact name, returning the ordered message script.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownCapability`] on a lookup miss.
    pub fn get_prompt(
        &self,
        name: &str,
        args: &CapabilityArgs,
    ) -> Result<Vec<PromptMessage>, RegistryError> {
        let capability = self
            .get(CapabilityKind::Prompt, name)
            .ok_or_else(|| RegistryError::UnknownCapability {
                kind: CapabilityKind::Prompt,
                name: name.to_string(),
            })?;
        match &capability.handler {
            Handler::Prompt(handler) => handler(args),
            _ => unreachable!("prompt capability holds a non-prompt handler"),
        }
    }

    /// Look up a capability's metadata by kind and exact identifier.
    pub fn get(&self, kind: CapabilityKind, identifier: &str) -> Option<&Capability> {
        self.entries.get(&(kind, identifier.to_string()))
    }

    /// All capabilities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn resources(&self) -> impl Iterator<Item = &Capability> {
        self.iter().filter(|c| c.kind == CapabilityKind::Resource)
    }

    fn templates(&self) -> impl Iterator<Item = &UriTemplate> {
        self.resources().filter_map(|c| match &c.handler {
            Handler::TemplateResource(template, _) => Some(template),
            _ => None,
        })
    }
}

/// Pull a required string argument out of a handler argument map.
///
/// # Errors
///
/// Returns [`RegistryError::MissingArgument`] if the key is absent or not
/// a JSON string.
pub fn require_str<'a>(
    args: &'a CapabilityArgs,
    capability: &str,
    key: &str,
) -> Result<&'a str, RegistryError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| RegistryError::MissingArgument {
            capability: capability.to_string(),
            argument: key.to_string(),
        })
}
