//! The three demo tool handlers: greeter, summarizer, word counter.
//!
//! All three are pure string/collection transforms with no validation
//! beyond what their output formats imply.

/// Friendly greeter so new users see basic tool wiring.
///
/// No input validation: an empty name produces a greeting with an
/// empty name.
pub fn spotlight(name: &str) -> String {
    format!("MCP spotlight -> Hello, {name}!")
}

/// Naive first-sentence summary: everything before the first period.
///
/// Not real summarization — abbreviations and decimal numbers will cut
/// the sentence short.
pub fn summarize(text: &str) -> String {
    let first_sentence = text
        .trim()
        .split('.')
        .next()
        .unwrap_or_default()
        .trim();
    if first_sentence.is_empty() {
        return "No content to summarize.".to_string();
    }
    format!("Summary: {first_sentence}.")
}

/// Count maximal non-whitespace runs so toolchains can inspect payload
/// sizes. Whitespace-only input counts zero words.
pub fn word_count(text: &str) -> serde_json::Value {
    let words = text.split_whitespace().count();
    serde_json::json!({ "words": words })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn spotlight_greets_by_name() {
        assert_eq!(
            spotlight("MCP explorer"),
            "MCP spotlight -> Hello, MCP explorer!"
        );
    }

    #[test]
    fn spotlight_accepts_empty_name() {
        assert_eq!(spotlight(""), "MCP spotlight -> Hello, !");
    }

    #[test]
    fn summarize_returns_first_sentence() {
        assert_eq!(
            summarize("Hello world. More text."),
            "Summary: Hello world."
        );
    }

    #[test]
    fn summarize_wraps_text_without_period() {
        assert_eq!(summarize("  just a fragment  "), "Summary: just a fragment.");
    }

    #[test]
    fn summarize_empty_input_returns_sentinel() {
        assert_eq!(summarize(""), "No content to summarize.");
        assert_eq!(summarize("   "), "No content to summarize.");
        assert_eq!(summarize("..."), "No content to summarize.");
        assert_eq!(summarize(" . trailing"), "No content to summarize.");
    }

    #[test]
    fn word_count_counts_whitespace_runs() {
        assert_eq!(word_count("one two  three\tfour\nfive"), json!({"words": 5}));
    }

    #[test]
    fn word_count_of_empty_input_is_zero() {
        assert_eq!(word_count(""), json!({"words": 0}));
        assert_eq!(word_count(" \t\n "), json!({"words": 0}));
    }

    proptest! {
        #[test]
        fn word_count_matches_reference_run_count(text in "\\PC{0,200}") {
            // Independent reference: count whitespace -> non-whitespace transitions
            let mut expected = 0;
            let mut in_word = false;
            for c in text.chars() {
                if c.is_whitespace() {
                    in_word = false;
                } else if !in_word {
                    in_word = true;
                    expected += 1;
                }
            }
            prop_assert_eq!(word_count(&text), json!({"words": expected}));
        }

        #[test]
        fn summarize_without_period_wraps_trimmed_text(text in "[^.]{0,80}") {
            let trimmed = text.trim();
            let expected = if trimmed.is_empty() {
                "No content to summarize.".to_string()
            } else {
                format!("Summary: {trimmed}.")
            };
            prop_assert_eq!(summarize(&text), expected);
        }
    }
}
