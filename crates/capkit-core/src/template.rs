//! Chat prompt templates.
//!
//! A [`ChatTemplate`] is an ordered list of (role, template-string) pairs.
//! Formatting interpolates `{variable}` placeholders from a set of bindings
//! and returns the messages in template order. `{{` and `}}` escape literal
//! braces.

use crate::content::{PromptMessage, Role};
use crate::error::TemplateError;

/// An ordered chat prompt template.
#[derive(Debug, Clone)]
pub struct ChatTemplate {
    messages: Vec<(Role, String)>,
}

impl ChatTemplate {
    /// Build a template from (role, text) pairs, preserving order.
    pub fn from_messages<R, S>(messages: impl IntoIterator<Item = (R, S)>) -> Self
    where
        R: Into<Role>,
        S: Into<String>,
    {
        Self {
            messages: messages
                .into_iter()
                .map(|(role, text)| (role.into(), text.into()))
                .collect(),
        }
    }

    /// Render every message with the given variable bindings.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingVariable`] if a placeholder has no
    /// binding, [`TemplateError::UnclosedPlaceholder`] on a stray `{`.
    pub fn format_messages(
        &self,
        vars: &[(&str, &str)],
    ) -> Result<Vec<PromptMessage>, TemplateError> {
        self.messages
            .iter()
            .map(|(role, text)| {
                let content = interpolate(text, vars)?;
                Ok(PromptMessage::new(role.clone(), content))
            })
            .collect()
    }
}

fn interpolate(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let rest = &template[i + 1..];
                let close = rest
                    .find('}')
                    .ok_or_else(|| TemplateError::UnclosedPlaceholder {
                        template: template.to_string(),
                    })?;
                let name = &rest[..close];
                let value = vars
                    .iter()
                    .find(|(k, _)| *k == name)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| TemplateError::MissingVariable {
                        name: name.to_string(),
                    })?;
                out.push_str(value);
                // Skip past the placeholder body and closing brace
                for _ in 0..name.chars().count() + 1 {
                    chars.next();
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_interpolates_variables() {
        let template = ChatTemplate::from_messages([
            ("system", "You introduce {topic} to new users."),
            ("user", "Greet {name} and mention {topic}."),
        ]);
        let messages = template
            .format_messages(&[("topic", "MCP"), ("name", "Ada")])
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You introduce MCP to new users.");
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Greet Ada and mention MCP.");
    }

    #[test]
    fn format_preserves_message_order() {
        let template = ChatTemplate::from_messages([
            ("system", "first"),
            ("user", "second"),
            ("assistant", "third"),
        ]);
        let messages = template.format_messages(&[]).unwrap();
        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant"]);
    }

    #[test]
    fn format_fails_on_unbound_variable() {
        let template = ChatTemplate::from_messages([("user", "Hello {name}")]);
        let err = template.format_messages(&[]).unwrap_err();
        assert!(matches!(err, TemplateError::MissingVariable { ref name } if name == "name"));
    }

    #[test]
    fn format_fails_on_unclosed_placeholder() {
        let template = ChatTemplate::from_messages([("user", "Hello {name")]);
        let err = template.format_messages(&[("name", "Ada")]).unwrap_err();
        assert!(matches!(err, TemplateError::UnclosedPlaceholder { .. }));
    }

    #[test]
    fn doubled_braces_escape_literals() {
        let template = ChatTemplate::from_messages([("user", "{{literal}} and {real}")]);
        let messages = template.format_messages(&[("real", "value")]).unwrap();
        assert_eq!(messages[0].content, "{literal} and value");
    }

    #[test]
    fn empty_placeholder_name_requires_binding() {
        let template = ChatTemplate::from_messages([("user", "{}")]);
        let err = template.format_messages(&[]).unwrap_err();
        assert!(matches!(err, TemplateError::MissingVariable { ref name } if name.is_empty()));
    }
}
