//! The demo prompt handler: a two-message orientation script.

use capkit_core::{PromptMessage, Role};

/// Name the orientation prompt is registered under.
pub const ORIENTATION_PROMPT: &str = "orientation";

/// Orientation script for a new MCP project: a fixed system message and a
/// user message interpolating the project name into three setup steps.
/// Pure function of `project`; always exactly two messages.
pub fn orientation(project: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::new(
            Role::System,
            "You are an MCP onboarding assistant who references registered \
             resources before calling tools.",
        ),
        PromptMessage::new(
            Role::User,
            format!(
                "Project: {project}.\n\
                 1. Read resource://mcp/primer.\n\
                 2. Ask the `spotlight` tool for a greeting.\n\
                 3. Summarize findings for the operator."
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_returns_exactly_two_messages() {
        let messages = orientation("X");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn orientation_interpolates_project_name() {
        let messages = orientation("X");
        assert!(messages[1].content.contains("Project: X."));
    }

    #[test]
    fn orientation_user_message_lists_three_steps() {
        let messages = orientation("Demo Workspace");
        let content = &messages[1].content;
        assert!(content.contains("1. Read resource://mcp/primer."));
        assert!(content.contains("2. Ask the `spotlight` tool for a greeting."));
        assert!(content.contains("3. Summarize findings for the operator."));
    }
}
