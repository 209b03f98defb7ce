//! Error types for capkit.

use thiserror::Error;

use crate::capability::CapabilityKind;

/// Top-level result type for capkit operations.
pub type Result<T> = std::result::Result<T, CapkitError>;

/// Top-level error type for capkit.
#[derive(Debug, Error)]
pub enum CapkitError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Errors raised by the capability registry, at registration or dispatch time.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("cannot register a {kind} with an empty identifier")]
    EmptyIdentifier { kind: CapabilityKind },

    #[error("{kind} '{identifier}' is already registered")]
    DuplicateCapability {
        kind: CapabilityKind,
        identifier: String,
    },

    #[error("resource template '{template}' overlaps already registered '{existing}'")]
    OverlappingTemplate { template: String, existing: String },

    #[error("invalid resource template: {0}")]
    InvalidTemplate(#[from] UriTemplateError),

    #[error("unknown {kind}: '{name}'")]
    UnknownCapability { kind: CapabilityKind, name: String },

    #[error("no resource matches URI '{uri}'")]
    UnknownResource { uri: String },

    #[error("'{capability}' requires a string argument '{argument}'")]
    MissingArgument {
        capability: String,
        argument: String,
    },
}

/// Errors from parsing a resource URI template.
#[derive(Debug, Error)]
pub enum UriTemplateError {
    #[error("template '{template}' contains no placeholder")]
    NoPlaceholder { template: String },

    #[error("template '{template}' contains more than one placeholder")]
    MultiplePlaceholders { template: String },

    #[error("template '{template}' has an unclosed placeholder")]
    UnclosedPlaceholder { template: String },

    #[error("template '{template}' has an empty placeholder name")]
    EmptyPlaceholder { template: String },
}

/// Errors from formatting a chat prompt template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("no value bound for template variable '{name}'")]
    MissingVariable { name: String },

    #[error("unclosed placeholder in template '{template}'")]
    UnclosedPlaceholder { template: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_messages() {
        let err = RegistryError::UnknownCapability {
            kind: CapabilityKind::Tool,
            name: "spotlight".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tool"));
        assert!(msg.contains("spotlight"));

        let err = RegistryError::DuplicateCapability {
            kind: CapabilityKind::Resource,
            identifier: "resource://mcp/primer".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("resource://mcp/primer"));
        assert!(msg.contains("already registered"));

        let err = TemplateError::MissingVariable {
            name: "project".to_string(),
        };
        assert!(err.to_string().contains("project"));
    }

    #[test]
    fn registry_error_wraps_into_top_level() {
        let err: CapkitError = RegistryError::UnknownResource {
            uri: "resource://mcp/nope".to_string(),
        }
        .into();
        assert!(err.to_string().contains("resource://mcp/nope"));
    }
}
