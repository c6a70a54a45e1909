//! # mdcompose
//!
//! A pure library for generating Markdown documents from trees of plain
//! data entries. Given data and configuration it deterministically
//! produces a string: no I/O, no shared state, no surprises.
//!
//! ## Quick Start
//!
//! ```
//! use mdcompose::{render, RenderOptions};
//! use mdcompose::builders::{bold, h1, ul};
//!
//! let entries = vec![
//!     h1("Hello, world!"),
//!     ul(vec!["one".into(), bold("two")]),
//! ];
//! let markdown = render(&entries, &RenderOptions::default()).unwrap();
//! assert_eq!(markdown, "# Hello, world!\n\n- one\n- **two**");
//! ```
//!
//! ## Working with entries
//!
//! An [`Entry`] is either a primitive (string, number, boolean, big
//! integer, date, null), a sequence, or a keyed record carrying one
//! discriminator key naming its construct (`"h1"`, `"bold"`, `"table"`,
//! ...). Records deserialize straight from JSON:
//!
//! ```
//! use mdcompose::{render, Entry, RenderOptions};
//!
//! let entries: Vec<Entry> =
//!     serde_json::from_str(r#"[{"h1": "Title"}, {"blockquote": "hi"}]"#).unwrap();
//! let markdown = render(&entries, &RenderOptions::default()).unwrap();
//! assert_eq!(markdown, "# Title\n\n> hi");
//! ```
//!
//! ## Extending the renderer
//!
//! Every construct is dispatched through a [`Registry`] keyed by
//! discriminator. Callers can override built-in renderers or register new
//! discriminators; see [`Registry::with_custom`].

pub mod builders;
pub mod entry;
pub mod error;
pub mod render;

pub use entry::Entry;
pub use error::{Error, Result};
pub use render::{
    render, render_entries, render_entry, Fence, Prefix, Registry, RenderOptions, Rendered,
    Renderer,
};
