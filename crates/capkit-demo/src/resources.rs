//! The two demo resource handlers: a static primer and a templated
//! capability deep dive.

/// URI of the static primer resource.
pub const PRIMER_URI: &str = "resource://mcp/primer";

/// URI template for the per-capability deep-dive resource.
pub const CAPABILITY_URI_TEMPLATE: &str = "resource://mcp/resources/{capability}";

/// Textual primer describing the three MCP capability types.
pub fn primer() -> String {
    concat!(
        "Resources: file-like data surfaces exposed via URIs so agents can read ",
        "context such as docs or API output.\n",
        "Tools: callable functions (with human approval) that let an LLM trigger ",
        "side effects or computations.\n",
        "Prompts: curated templates that standardize multi-step instructions for ",
        "common workflows."
    )
    .to_string()
}

/// Deep-dive text for a named capability, matched case-insensitively.
/// Unknown names get a fixed sentinel rather than an error.
pub fn capability_detail(capability: &str) -> String {
    match capability.to_lowercase().as_str() {
        "resources" => "Stream large context or structured payloads via URIs.",
        "tools" => "Wrap business logic so an LLM can request actions on demand.",
        "prompts" => "Share proven instructions so users are productive instantly.",
        _ => "Unknown capability.",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primer_names_all_three_capability_types() {
        let text = primer();
        assert!(text.starts_with("Resources:"));
        assert!(text.contains("\nTools:"));
        assert!(text.contains("\nPrompts:"));
    }

    #[test]
    fn capability_detail_is_case_insensitive() {
        assert_eq!(capability_detail("TOOLS"), capability_detail("tools"));
        assert_eq!(capability_detail("Prompts"), capability_detail("prompts"));
    }

    #[test]
    fn capability_detail_known_names() {
        assert_eq!(
            capability_detail("prompts"),
            "Share proven instructions so users are productive instantly."
        );
        assert_eq!(
            capability_detail("resources"),
            "Stream large context or structured payloads via URIs."
        );
    }

    #[test]
    fn capability_detail_unknown_name_returns_sentinel() {
        assert_eq!(capability_detail("bogus"), "Unknown capability.");
        // No partial matching
        assert_eq!(capability_detail("tool"), "Unknown capability.");
    }
}
