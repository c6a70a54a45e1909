//! Code spans and code blocks.
//!
//! Spans size their backtick fence to one more than the longest backtick
//! run in the content, with a padding space when the content itself starts
//! or ends with a backtick. Blocks are either 4-space indented or fenced
//! with triple backticks/tildes and an optional language tag.

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::render_inline;
use super::options::{Fence, RenderOptions};
use super::Rendered;

/// Length of the longest run of consecutive backticks in `content`.
fn longest_backtick_run(content: &str) -> usize {
    let mut max_run = 0;
    let mut current_run = 0;
    for c in content.chars() {
        if c == '`' {
            current_run += 1;
            max_run = max_run.max(current_run);
        } else {
            current_run = 0;
        }
    }
    max_run
}

pub fn render_code(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry.get("code").ok_or(Error::ShapeMismatch("code"))?;
    let text = render_inline(content, options)?;

    let tick_count = longest_backtick_run(&text) + 1;
    let ticks: String = std::iter::repeat_n('`', tick_count).collect();
    let spacer = if text.starts_with('`') || text.ends_with('`') {
        " "
    } else {
        ""
    };

    Ok(Rendered::Inline(format!(
        "{ticks}{spacer}{text}{spacer}{ticks}"
    )))
}

pub fn render_codeblock(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry
        .get("codeblock")
        .ok_or(Error::ShapeMismatch("codeblock"))?;

    // Content is a single string (possibly multi-line) or a sequence of
    // lines.
    let body = match content {
        Entry::Seq(lines) => {
            let mut rendered = Vec::with_capacity(lines.len());
            for line in lines {
                rendered.push(render_inline(line, options)?);
            }
            rendered.join("\n")
        }
        _ => render_inline(content, options)?,
    };

    // Local `fenced` wins over the document default.
    let local = entry.get("fenced").map(parse_fence_setting);
    let fence = match local {
        Some(setting) => setting,
        None => options.use_codeblock_fencing,
    };

    let markdown = match fence {
        Some(fence) => {
            let delimiter: String = std::iter::repeat_n(fence.character(), 3).collect();
            let language = entry
                .get("language")
                .and_then(Entry::as_str)
                .unwrap_or_default();
            format!("{delimiter}{language}\n{body}\n{delimiter}")
        }
        None => body
            .split('\n')
            .map(|line| format!("    {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(Rendered::Block(markdown))
}

fn parse_fence_setting(value: &Entry) -> Option<Fence> {
    match value {
        Entry::Bool(true) => Some(Fence::Backtick),
        Entry::Str(s) if s == "~" => Some(Fence::Tilde),
        Entry::Str(s) if s == "`" => Some(Fence::Backtick),
        _ => None,
    }
}
