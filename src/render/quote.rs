//! Blockquote rendering.

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::render_entries;
use super::options::RenderOptions;
use super::Rendered;

/// Render a blockquote by composing its content under a `> ` prefix.
///
/// The ambient prefix is applied by the enclosing composition to this
/// renderer's whole output, so nesting blockquotes (or quoting lists)
/// stacks prefixes additively.
pub fn render_blockquote(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry
        .get("blockquote")
        .ok_or(Error::ShapeMismatch("blockquote"))?;
    let quoted = options.with_prefix("> ".into());
    let body = match content {
        Entry::Seq(items) => render_entries(items, &quoted)?,
        single => render_entries(std::slice::from_ref(single), &quoted)?,
    };
    Ok(Rendered::Block(body))
}
