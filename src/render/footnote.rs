//! Footnote markers, collection, and the end-of-document section.
//!
//! Footnote entries render inline as `[^id]` wherever they appear. A
//! generic walk over the original input then finds every record carrying a
//! `footnote` key, at any depth, in document order; the collected notes are
//! rendered once as a section appended after the main body.

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::{render_entries, render_inline, Prefix};
use super::options::RenderOptions;
use super::registry::render_entry;
use super::Rendered;

const CONTINUATION_INDENT: &str = "    ";

/// Render the inline `[^id]` marker.
pub fn render_footnote(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let settings = entry
        .get("footnote")
        .ok_or(Error::ShapeMismatch("footnote"))?;
    let id = footnote_id(settings, options)?;
    Ok(Rendered::Inline(format!("[^{id}]")))
}

/// Collect every footnote record in the input, depth first, in order of
/// first encounter.
///
/// The walk is generic over the value shapes (primitive, sequence, keyed
/// record), so footnotes are found inside unknown or caller-defined
/// constructs too.
pub fn collect_footnotes(entries: &[Entry]) -> Vec<&Entry> {
    let mut found = Vec::new();
    for entry in entries {
        walk(entry, &mut found);
    }
    found
}

fn walk<'a>(entry: &'a Entry, found: &mut Vec<&'a Entry>) {
    match entry {
        Entry::Seq(items) => {
            for item in items {
                walk(item, found);
            }
        }
        Entry::Record(record) => {
            if record.contains_key("footnote") {
                found.push(entry);
            }
            for value in record.values() {
                walk(value, found);
            }
        }
        _ => {}
    }
}

/// Render the collected footnotes as a bottom-of-document section.
///
/// Each note's content renders at column zero (`[^id]: ` on the first
/// line, 4-space continuation indent after), and notes are separated by
/// one blank line.
pub fn render_footnote_section(notes: &[&Entry], options: &RenderOptions) -> Result<String> {
    // The section always sits flush left, whatever prefix the body used.
    let options = options.with_prefix(Prefix::default());

    let mut blocks = Vec::with_capacity(notes.len());
    for note in notes {
        let Some(settings) = note.get("footnote") else {
            continue;
        };
        let id = footnote_id(settings, &options)?;
        let content = settings
            .get("content")
            .ok_or_else(|| Error::InvalidEntry("footnote requires content".to_string()))?;
        let body = match content {
            Entry::Seq(items) => render_entries(items, &options)?,
            single => render_entry(single, &options)?.into_text(),
        };

        let mut lines = body.split('\n');
        let first = lines.next().unwrap_or_default();
        let mut block = format!("[^{id}]: {first}");
        for line in lines {
            block.push('\n');
            block.push_str(CONTINUATION_INDENT);
            block.push_str(line);
        }
        blocks.push(block);
    }
    Ok(blocks.join("\n\n"))
}

fn footnote_id(settings: &Entry, options: &RenderOptions) -> Result<String> {
    let id = settings
        .get("id")
        .ok_or_else(|| Error::InvalidEntry("footnote requires an id".to_string()))?;
    render_inline(id, options)
}
