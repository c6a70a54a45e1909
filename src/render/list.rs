//! Ordered, unordered, and task lists.
//!
//! A list item is either a single entry (one primary line, with any extra
//! lines indented under it) or a sequence (a primary line followed by
//! nested entries, composed with a marker-then-indent prefix). Nesting is
//! additive: each level contributes four spaces on top of the ambient
//! prefix.

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::{render_entries, render_single_line, Prefix};
use super::options::RenderOptions;
use super::registry::render_entry;
use super::Rendered;

const NESTED_INDENT: &str = "    ";

pub fn render_unordered_list(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let items = entry
        .get("ul")
        .and_then(Entry::as_seq)
        .ok_or(Error::ShapeMismatch("ul"))?;
    let indicator = entry
        .get("indicator")
        .and_then(Entry::as_char)
        .unwrap_or(options.unordered_list_item_indicator);

    let marker = format!("{indicator} ");
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        lines.push(render_list_item(item, options, &marker)?);
    }
    Ok(Rendered::Block(lines.join("\n")))
}

pub fn render_ordered_list(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let items = entry
        .get("ol")
        .and_then(Entry::as_seq)
        .ok_or(Error::ShapeMismatch("ol"))?;

    let mut lines = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let marker = format!("{}. ", index + 1);
        lines.push(render_list_item(item, options, &marker)?);
    }
    Ok(Rendered::Block(lines.join("\n")))
}

fn render_list_item(item: &Entry, options: &RenderOptions, marker: &str) -> Result<String> {
    if let Entry::Seq(children) = item {
        // Primary line plus nested entries: the marker lands on the first
        // entry, everything after indents under it.
        let child_options = options.with_prefix(Prefix::FirstRest {
            first: marker.to_string(),
            rest: NESTED_INDENT.to_string(),
        });
        let rendered = render_entries(children, &child_options)?;
        return Ok(match rendered.split_once('\n') {
            Some((first, rest)) => {
                format!("{}\n{rest}", escape_marker_line(first, marker))
            }
            None => escape_marker_line(&rendered, marker),
        });
    }

    let markdown = render_entry(item, options)?.into_text();
    let markdown = escape_leading_ordinal(&markdown);
    Ok(markdown
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                format!("{marker}{line}")
            } else {
                format!("{NESTED_INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Escape a leading `N.` on a marker-prefixed primary line.
fn escape_marker_line(line: &str, marker: &str) -> String {
    match line.strip_prefix(marker) {
        Some(text) => format!("{marker}{}", escape_leading_ordinal(text)),
        None => line.to_string(),
    }
}

/// Escape a leading `N.` so the item text is not misread as a second
/// ordered-list marker.
fn escape_leading_ordinal(text: &str) -> String {
    let digits = text.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 && text[digits..].starts_with('.') {
        format!("{}\\.{}", &text[..digits], &text[digits + 1..])
    } else {
        text.to_string()
    }
}

pub fn render_task_list(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let items = entry
        .get("tasks")
        .and_then(Entry::as_seq)
        .ok_or(Error::ShapeMismatch("tasks"))?;

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let (content, completed) = match item.get("task") {
            Some(content) => (
                content,
                item.get("completed")
                    .and_then(Entry::as_bool)
                    .unwrap_or(false),
            ),
            None => (item, false),
        };
        let text = render_single_line(content, options, "task list item")?;
        let mark = if completed { 'x' } else { ' ' };
        lines.push(format!("- [{mark}] {text}"));
    }
    Ok(Rendered::Block(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{blockquote, bold, ol, task, tasks, text, ul};

    #[test]
    fn test_unordered_list() {
        let options = RenderOptions::default();
        let entry = ul(vec!["a".into(), "b".into()]);
        assert_eq!(
            render_unordered_list(&entry, &options).unwrap().text(),
            "- a\n- b"
        );
    }

    #[test]
    fn test_unordered_indicator_override() {
        let options = RenderOptions::default();
        let entry = ul(vec!["a".into()]).with("indicator", Entry::from("+"));
        assert_eq!(
            render_unordered_list(&entry, &options).unwrap().text(),
            "+ a"
        );
    }

    #[test]
    fn test_document_level_indicator() {
        let options = RenderOptions {
            unordered_list_item_indicator: '*',
            ..RenderOptions::default()
        };
        let entry = ul(vec!["a".into()]);
        assert_eq!(
            render_unordered_list(&entry, &options).unwrap().text(),
            "* a"
        );
    }

    #[test]
    fn test_ordered_list_numbers_from_one() {
        let options = RenderOptions::default();
        let entry = ol(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(
            render_ordered_list(&entry, &options).unwrap().text(),
            "1. a\n2. b\n3. c"
        );
    }

    #[test]
    fn test_nested_ordered_list() {
        let options = RenderOptions::default();
        let entry = ol(vec![
            "a".into(),
            Entry::Seq(vec!["b".into(), ol(vec!["c".into()])]),
        ]);
        assert_eq!(
            render_ordered_list(&entry, &options).unwrap().text(),
            "1. a\n2. b\n    1. c"
        );
    }

    #[test]
    fn test_nested_numbering_restarts() {
        let options = RenderOptions::default();
        let entry = ol(vec![
            Entry::Seq(vec!["a".into(), ol(vec!["x".into(), "y".into()])]),
            "b".into(),
        ]);
        assert_eq!(
            render_ordered_list(&entry, &options).unwrap().text(),
            "1. a\n    1. x\n    2. y\n2. b"
        );
    }

    #[test]
    fn test_list_in_blockquote_composes_prefixes() {
        let options = RenderOptions::default();
        let entry = blockquote(vec![ul(vec!["a".into(), "b".into()])]);
        let rendered = render_entry(&entry, &options).unwrap();
        assert_eq!(rendered.text(), "> - a\n> - b");
    }

    #[test]
    fn test_rich_item_content() {
        // Inline concatenation goes through the text construct; a bare
        // sequence item means a primary line plus nested entries.
        let options = RenderOptions::default();
        let entry = ul(vec![text(vec![Entry::from("see "), bold("this")])]);
        assert_eq!(
            render_unordered_list(&entry, &options).unwrap().text(),
            "- see **this**"
        );
    }

    #[test]
    fn test_sequence_item_nests_rather_than_concatenates() {
        let options = RenderOptions::default();
        let entry = ul(vec![Entry::Seq(vec![Entry::from("see "), bold("this")])]);
        assert_eq!(
            render_unordered_list(&entry, &options).unwrap().text(),
            "- see \n    **this**"
        );
    }

    #[test]
    fn test_leading_ordinal_escaped() {
        let options = RenderOptions::default();
        let entry = ul(vec!["1. not a list".into()]);
        assert_eq!(
            render_unordered_list(&entry, &options).unwrap().text(),
            "- 1\\. not a list"
        );
    }

    #[test]
    fn test_leading_ordinal_escaped_in_nested_item() {
        let options = RenderOptions::default();
        let entry = ul(vec![Entry::Seq(vec![
            "1. not a list".into(),
            ul(vec!["child".into()]),
        ])]);
        assert_eq!(
            render_unordered_list(&entry, &options).unwrap().text(),
            "- 1\\. not a list\n    - child"
        );
    }

    #[test]
    fn test_ordinal_without_period_untouched() {
        assert_eq!(escape_leading_ordinal("1984 was a year"), "1984 was a year");
        assert_eq!(escape_leading_ordinal("12.5 units"), "12\\.5 units");
    }

    #[test]
    fn test_task_list() {
        let options = RenderOptions::default();
        let entry = tasks(vec![
            task("write", true),
            task("review", false),
            "publish".into(),
        ]);
        assert_eq!(
            render_task_list(&entry, &options).unwrap().text(),
            "- [x] write\n- [ ] review\n- [ ] publish"
        );
    }

    #[test]
    fn test_task_rejects_multi_line_content() {
        let options = RenderOptions::default();
        let entry = tasks(vec!["one\ntwo".into()]);
        let result = render_task_list(&entry, &options);
        assert!(matches!(result, Err(Error::UnsupportedShape(_))));
    }
}
