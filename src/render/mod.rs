//! Pure Markdown generation from entry trees.
//!
//! This module is the rendering core. The design separates each concern
//! into a pure, independently testable piece:
//!
//! - [`registry`]: the discriminator → renderer mapping and entry dispatch
//! - [`compose`]: recursive sequence composition (prefixing, block-level
//!   joining, `append` suffixes)
//! - one module per construct family ([`header`], [`emphasis`], [`code`],
//!   [`list`], [`table`], [`quote`], [`link`], [`misc`], [`footnote`])
//! - [`correct`]: the post-render emphasis correction pass
//!
//! ## Design notes
//!
//! - **Open dispatch**: records are routed by scanning registry keys in
//!   insertion order, so callers can override built-ins or add their own
//!   discriminators without touching the engine.
//! - **Additive nesting**: renderers that nest content install only their
//!   own prefix; the enclosing composition applies the ambient one to
//!   their whole output, so blockquote and list indentation stack in any
//!   mixture.
//! - **Footnote accumulation**: markers render inline where they appear; a
//!   separate walk over the original input collects every footnote, at any
//!   depth, for a single end-of-document section.
//! - **Dynamic code fences**: inline code sizes its backtick fence to one
//!   more than the longest run in the content.

pub mod code;
pub mod compose;
pub mod correct;
pub mod emphasis;
pub mod footnote;
pub mod header;
pub mod link;
pub mod list;
pub mod misc;
pub mod options;
pub mod quote;
pub mod registry;
pub mod table;

pub use compose::{render_entries, render_inline, Prefix};
pub use correct::correct_mid_word_emphasis;
pub use footnote::collect_footnotes;
pub use options::{Fence, RenderOptions};
pub use registry::{render_entry, Registry, Renderer};

use crate::entry::Entry;
use crate::error::Result;

/// The output of rendering one entry.
///
/// Block-level results must be separated from siblings by a blank line
/// when composed in a sequence; inline results concatenate as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Inline(String),
    Block(String),
}

impl Rendered {
    pub fn text(&self) -> &str {
        match self {
            Rendered::Inline(text) | Rendered::Block(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Rendered::Inline(text) | Rendered::Block(text) => text,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Rendered::Block(_))
    }
}

/// Render a document: compose the entries, append the collected footnote
/// section, and run the emphasis correction pass.
///
/// This is the single entry point for whole-document rendering. Options
/// default via [`RenderOptions::default`].
///
/// ```
/// use mdcompose::{render, RenderOptions};
/// use mdcompose::builders::{bold, h1};
///
/// let entries = vec![h1("Hello, world!"), bold("welcome")];
/// let markdown = render(&entries, &RenderOptions::default()).unwrap();
/// assert_eq!(markdown, "# Hello, world!\n\n**welcome**");
/// ```
pub fn render(entries: &[Entry], options: &RenderOptions) -> Result<String> {
    let mut document = render_entries(entries, options)?;

    let notes = collect_footnotes(entries);
    if !notes.is_empty() {
        let section = footnote::render_footnote_section(&notes, options)?;
        if !section.is_empty() {
            if !document.is_empty() {
                document.push_str("\n\n");
            }
            document.push_str(&section);
        }
    }

    Ok(correct_mid_word_emphasis(&document))
}
