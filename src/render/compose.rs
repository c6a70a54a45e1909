//! Recursive composition of entry sequences.
//!
//! [`render_entries`] turns an ordered sequence of entries into one
//! multi-line fragment: every line of every entry picks up the current
//! prefix, block-level entries get a blank separator line (itself
//! prefixed, so `> ` continues through blank lines inside a blockquote),
//! and `append` suffixes land flush below their entry.

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::options::RenderOptions;
use super::registry::render_entry;

/// Per-line prefix applied during composition.
///
/// List items need a marker on the first entry and plain indentation on
/// everything after it; `FirstRest` covers that without the rest of the
/// engine knowing about list markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefix {
    /// The same prefix for every entry in the sequence.
    Fixed(String),
    /// `first` for the entry at index 0, `rest` for all later entries.
    FirstRest { first: String, rest: String },
}

impl Prefix {
    /// The prefix text for the entry at `index`.
    pub fn for_index(&self, index: usize) -> &str {
        match self {
            Prefix::Fixed(prefix) => prefix,
            Prefix::FirstRest { first, rest } => {
                if index == 0 {
                    first
                } else {
                    rest
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Prefix::Fixed(prefix) => prefix.is_empty(),
            Prefix::FirstRest { first, rest } => first.is_empty() && rest.is_empty(),
        }
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Prefix::Fixed(String::new())
    }
}

impl From<&str> for Prefix {
    fn from(prefix: &str) -> Self {
        Prefix::Fixed(prefix.to_string())
    }
}

/// Render an ordered sequence of entries into one document fragment.
pub fn render_entries(entries: &[Entry], options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let prefix = options.prefix.for_index(index);
        let rendered = render_entry(entry, options)?;
        let block = rendered.is_block();
        output.push_str(&prefix_lines(rendered.text(), prefix));

        // Out-of-band suffix (e.g. a block reference ID). Sits flush below
        // the entry, bypassing prefixing and block spacing.
        if let Some(append) = entry.get("append") {
            let suffix = render_entry(append, options)?;
            if !suffix.text().is_empty() {
                output.push('\n');
                output.push_str(suffix.text());
            }
        }

        if index < entries.len() - 1 {
            output.push('\n');
            if block {
                output.push_str(prefix);
                output.push('\n');
            }
        }
    }
    Ok(output)
}

/// Render an entry in an inline position.
///
/// Sequences concatenate segment by segment with no added whitespace;
/// everything else renders normally and contributes its text.
pub fn render_inline(entry: &Entry, options: &RenderOptions) -> Result<String> {
    match entry {
        Entry::Seq(items) => {
            let mut output = String::new();
            for item in items {
                output.push_str(&render_inline(item, options)?);
            }
            Ok(output)
        }
        _ => Ok(render_entry(entry, options)?.into_text()),
    }
}

/// Render an entry that must occupy a single line (table cells, task items).
pub fn render_single_line(
    entry: &Entry,
    options: &RenderOptions,
    context: &str,
) -> Result<String> {
    let text = match entry {
        Entry::Seq(_) => render_inline(entry, options)?,
        _ => {
            let rendered = render_entry(entry, options)?;
            if rendered.is_block() {
                return Err(Error::UnsupportedShape(format!(
                    "{context} cannot contain block-level content"
                )));
            }
            rendered.into_text()
        }
    };
    if text.contains('\n') {
        return Err(Error::UnsupportedShape(format!(
            "{context} must render to a single line"
        )));
    }
    Ok(text)
}

/// Prefix every line of `text`, including empty ones.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{blockquote, bold, h1, h2};

    #[test]
    fn test_empty_sequence() {
        let options = RenderOptions::default();
        assert_eq!(render_entries(&[], &options).unwrap(), "");
    }

    #[test]
    fn test_inline_entries_join_with_single_newline() {
        let options = RenderOptions::default();
        let entries = vec![Entry::from("one"), Entry::from("two")];
        assert_eq!(render_entries(&entries, &options).unwrap(), "one\ntwo");
    }

    #[test]
    fn test_block_entries_get_one_blank_line() {
        let options = RenderOptions::default();
        let entries = vec![h1("First"), h2("Second")];
        assert_eq!(
            render_entries(&entries, &options).unwrap(),
            "# First\n\n## Second"
        );
    }

    #[test]
    fn test_blank_separator_carries_prefix() {
        let options = RenderOptions::default().with_prefix("> ".into());
        let entries = vec![h1("First"), h2("Second")];
        assert_eq!(
            render_entries(&entries, &options).unwrap(),
            "> # First\n> \n> ## Second"
        );
    }

    #[test]
    fn test_multi_line_content_is_fully_prefixed() {
        let options = RenderOptions::default();
        let entries = vec![blockquote(vec![Entry::from("a"), Entry::from("b")])];
        assert_eq!(render_entries(&entries, &options).unwrap(), "> a\n> b");
    }

    #[test]
    fn test_append_suffix_sits_flush_below() {
        let options = RenderOptions::default();
        let entries = vec![
            h1("Title").with("append", Entry::from("^block-id")),
            Entry::from("body"),
        ];
        assert_eq!(
            render_entries(&entries, &options).unwrap(),
            "# Title\n^block-id\n\nbody"
        );
    }

    #[test]
    fn test_empty_append_is_skipped() {
        let options = RenderOptions::default();
        let entries = vec![h1("Title").with("append", Entry::from(""))];
        assert_eq!(render_entries(&entries, &options).unwrap(), "# Title");
    }

    #[test]
    fn test_first_rest_prefix() {
        let options = RenderOptions::default().with_prefix(Prefix::FirstRest {
            first: "1. ".to_string(),
            rest: "    ".to_string(),
        });
        let entries = vec![Entry::from("head"), Entry::from("tail")];
        assert_eq!(
            render_entries(&entries, &options).unwrap(),
            "1. head\n    tail"
        );
    }

    #[test]
    fn test_inline_sequence_concatenates() {
        let options = RenderOptions::default();
        let entry = Entry::Seq(vec![Entry::from("a "), bold("b"), Entry::from(" c")]);
        assert_eq!(render_inline(&entry, &options).unwrap(), "a **b** c");
    }

    #[test]
    fn test_single_line_rejects_block_content() {
        let options = RenderOptions::default();
        let result = render_single_line(&h1("nope"), &options, "table cell");
        assert!(matches!(result, Err(Error::UnsupportedShape(_))));
    }
}
