//! The renderer registry and entry dispatch.
//!
//! Records are routed to a renderer by scanning the registry's keys in
//! insertion order and taking the first key the record carries. That scan
//! order is part of the dispatch contract, so the registry is backed by an
//! insertion-ordered map.

use chrono::SecondsFormat;
use indexmap::IndexMap;

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::render_inline;
use super::options::RenderOptions;
use super::Rendered;
use super::{code, emphasis, footnote, header, link, list, misc, quote, table};

/// A pure function converting one entry into rendered Markdown.
///
/// Each renderer owns validation of its own discriminator: invoked on an
/// entry without it, the renderer fails with [`Error::ShapeMismatch`].
pub type Renderer = fn(&Entry, &RenderOptions) -> Result<Rendered>;

/// The mapping from discriminator key to renderer.
///
/// Iteration order is insertion order. [`Registry::insert`] replaces an
/// existing renderer under the same key without changing its position, so
/// overriding a built-in keeps its precedence in the dispatch scan.
#[derive(Clone)]
pub struct Registry {
    renderers: IndexMap<String, Renderer>,
}

impl Registry {
    /// An empty registry, with no renderers installed.
    pub fn empty() -> Self {
        Self {
            renderers: IndexMap::new(),
        }
    }

    /// The default registry extended with custom renderers.
    ///
    /// Custom entries win over built-ins with the same key; new keys are
    /// appended after the built-ins, so built-in discriminators are scanned
    /// first.
    pub fn with_custom<I>(custom: I) -> Self
    where
        I: IntoIterator<Item = (String, Renderer)>,
    {
        let mut registry = Registry::default();
        for (key, renderer) in custom {
            registry.insert(key, renderer);
        }
        registry
    }

    /// Install or replace a renderer.
    pub fn insert(&mut self, key: impl Into<String>, renderer: Renderer) {
        self.renderers.insert(key.into(), renderer);
    }

    pub fn get(&self, key: &str) -> Option<Renderer> {
        self.renderers.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Renderer)> {
        self.renderers.iter().map(|(k, r)| (k.as_str(), *r))
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Registry::empty();
        // Primitive renderers first, then constructs. The construct order
        // determines which discriminator wins the dispatch scan when a
        // record carries several (an error today, but the order is still
        // observable through custom renderers).
        registry.insert("string", render_string as Renderer);
        registry.insert("number", render_number);
        registry.insert("boolean", render_boolean);
        registry.insert("bigint", render_bigint);
        registry.insert("date", render_date);
        registry.insert("null", render_null);
        registry.insert("h1", header::render_h1);
        registry.insert("h2", header::render_h2);
        registry.insert("h3", header::render_h3);
        registry.insert("h4", header::render_h4);
        registry.insert("h5", header::render_h5);
        registry.insert("h6", header::render_h6);
        registry.insert("blockquote", quote::render_blockquote);
        registry.insert("bold", emphasis::render_bold);
        registry.insert("italic", emphasis::render_italic);
        registry.insert("strikethrough", emphasis::render_strikethrough);
        registry.insert("highlight", emphasis::render_highlight);
        registry.insert("sub", emphasis::render_subscript);
        registry.insert("sup", emphasis::render_superscript);
        registry.insert("code", code::render_code);
        registry.insert("codeblock", code::render_codeblock);
        registry.insert("ul", list::render_unordered_list);
        registry.insert("ol", list::render_ordered_list);
        registry.insert("dl", misc::render_description_list);
        registry.insert("table", table::render_table);
        registry.insert("tasks", list::render_task_list);
        registry.insert("text", misc::render_text);
        registry.insert("link", link::render_link);
        registry.insert("img", link::render_image);
        registry.insert("emoji", misc::render_emoji);
        registry.insert("hr", misc::render_horizontal_rule);
        registry.insert("footnote", footnote::render_footnote);
        registry
    }
}

/// Render a single entry by routing it to the matching renderer.
///
/// Primitives go to their named renderer (`"string"`, `"number"`, ...).
/// Sequences are rich text and concatenate inline. Records are scanned
/// against the registry: no recognized key renders as empty content, more
/// than one is an error.
pub fn render_entry(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let key = match entry {
        Entry::Null => "null",
        Entry::Bool(_) => "boolean",
        Entry::Int(_) | Entry::Float(_) => "number",
        Entry::BigInt(_) => "bigint",
        Entry::Str(_) => "string",
        Entry::Date(_) => "date",
        Entry::Seq(_) => {
            return Ok(Rendered::Inline(render_inline(entry, options)?));
        }
        Entry::Record(record) => {
            let matches: Vec<(&str, Renderer)> = options
                .renderers
                .iter()
                .filter(|(key, _)| record.contains_key(*key))
                .collect();
            return match matches.as_slice() {
                [] => Ok(Rendered::Inline(String::new())),
                [(_, renderer)] => renderer(entry, options),
                _ => {
                    let keys: Vec<&str> = matches.iter().map(|(key, _)| *key).collect();
                    Err(Error::AmbiguousEntry(keys.join(", ")))
                }
            };
        }
    };
    match options.renderers.get(key) {
        Some(renderer) => renderer(entry, options),
        None => Ok(Rendered::Inline(String::new())),
    }
}

fn render_string(entry: &Entry, _options: &RenderOptions) -> Result<Rendered> {
    match entry {
        Entry::Str(s) => Ok(Rendered::Inline(s.clone())),
        _ => Err(Error::ShapeMismatch("string")),
    }
}

fn render_number(entry: &Entry, _options: &RenderOptions) -> Result<Rendered> {
    match entry {
        Entry::Int(n) => Ok(Rendered::Inline(n.to_string())),
        Entry::Float(n) => Ok(Rendered::Inline(n.to_string())),
        _ => Err(Error::ShapeMismatch("number")),
    }
}

fn render_boolean(entry: &Entry, _options: &RenderOptions) -> Result<Rendered> {
    match entry {
        Entry::Bool(b) => Ok(Rendered::Inline(b.to_string())),
        _ => Err(Error::ShapeMismatch("boolean")),
    }
}

fn render_bigint(entry: &Entry, _options: &RenderOptions) -> Result<Rendered> {
    match entry {
        Entry::BigInt(n) => Ok(Rendered::Inline(n.to_string())),
        _ => Err(Error::ShapeMismatch("bigint")),
    }
}

fn render_date(entry: &Entry, _options: &RenderOptions) -> Result<Rendered> {
    match entry {
        Entry::Date(d) => Ok(Rendered::Inline(
            d.to_rfc3339_opts(SecondsFormat::Millis, true),
        )),
        _ => Err(Error::ShapeMismatch("date")),
    }
}

fn render_null(entry: &Entry, _options: &RenderOptions) -> Result<Rendered> {
    match entry {
        Entry::Null => Ok(Rendered::Inline(String::new())),
        _ => Err(Error::ShapeMismatch("null")),
    }
}
