//! Resource URI templates.
//!
//! A template is a resource identifier with exactly one `{placeholder}`
//! segment, e.g. `resource://mcp/resources/{capability}`. Parsing splits it
//! into literal prefix, placeholder name, and literal suffix at registration
//! time; matching is a prefix/suffix check with a greedy non-empty capture.

use crate::error::UriTemplateError;

/// A parsed URI template: `<prefix>{<param>}<suffix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    raw: String,
    prefix: String,
    param: String,
    suffix: String,
}

impl UriTemplate {
    /// Parse a template string containing exactly one `{placeholder}`.
    ///
    /// # Errors
    ///
    /// Returns [`UriTemplateError`] if the template has zero placeholders,
    /// more than one, an unclosed brace, or an empty placeholder name.
    pub fn parse(template: &str) -> Result<Self, UriTemplateError> {
        let open = template
            .find('{')
            .ok_or_else(|| UriTemplateError::NoPlaceholder {
                template: template.to_string(),
            })?;
        let close = template[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| UriTemplateError::UnclosedPlaceholder {
                template: template.to_string(),
            })?;

        let param = &template[open + 1..close];
        if param.is_empty() {
            return Err(UriTemplateError::EmptyPlaceholder {
                template: template.to_string(),
            });
        }

        let suffix = &template[close + 1..];
        if suffix.contains('{') {
            return Err(UriTemplateError::MultiplePlaceholders {
                template: template.to_string(),
            });
        }

        Ok(Self {
            raw: template.to_string(),
            prefix: template[..open].to_string(),
            param: param.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// The template string as registered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The placeholder name.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Match a URI against this template, capturing the placeholder value.
    ///
    /// The literal prefix and suffix must match exactly and the captured
    /// middle must be non-empty. The capture is greedy: the suffix is
    /// matched from the right, so `a/{x}.md` captures `b.c` from `a/b.c.md`.
    pub fn matches<'a>(&self, uri: &'a str) -> Option<&'a str> {
        let rest = uri.strip_prefix(self.prefix.as_str())?;
        let capture = rest.strip_suffix(self.suffix.as_str())?;
        if capture.is_empty() {
            return None;
        }
        Some(capture)
    }

    /// Substitute a value into the placeholder, producing a concrete URI.
    pub fn render(&self, value: &str) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }

    /// Whether two templates have the same literal shape and would match
    /// the same set of URIs. Registration rejects such overlaps.
    pub fn same_shape(&self, other: &UriTemplate) -> bool {
        self.prefix == other.prefix && self.suffix == other.suffix
    }
}
