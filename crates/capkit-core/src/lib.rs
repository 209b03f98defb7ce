//! # capkit-core
//!
//! Capability registry and supporting types for the capkit MCP demo.
//!
//! This crate defines the self-contained core the rest of the workspace
//! builds on:
//! - [`CapabilityRegistry`] — registration and dispatch for tools,
//!   resources, and prompts
//! - [`Capability`] / [`CapabilityKind`] — the tagged registration record
//! - [`UriTemplate`] — one-placeholder resource URI matching
//! - [`ResourceContent`] / [`ContentChunk`] — resolved resource payloads
//! - [`PromptMessage`] / [`Role`] — ordered conversation scripts
//! - [`ChatTemplate`] — `{var}` interpolation over (role, text) pairs
//! - Error hierarchy ([`CapkitError`], [`RegistryError`], [`TemplateError`])

pub mod capability;
pub mod content;
pub mod error;
pub mod registry;
pub mod template;
pub mod uri;

pub use capability::{Capability, CapabilityArgs, CapabilityKind};
pub use content::{ContentChunk, PromptMessage, ResourceContent, Role};
pub use error::{CapkitError, RegistryError, Result, TemplateError, UriTemplateError};
pub use registry::{require_str, CapabilityRegistry};
pub use template::ChatTemplate;
pub use uri::UriTemplate;
