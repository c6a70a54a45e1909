//! Convenience constructors for correctly-shaped entries.
//!
//! These are purely additive sugar over building [`Entry::Record`] values
//! by hand; the object form and the builder form render identically.
//! Modifier keys chain on with [`Entry::with`]:
//!
//! ```
//! use mdcompose::builders::{codeblock, h1};
//! use mdcompose::Entry;
//!
//! let heading = h1("Install").with("id", Entry::from("install"));
//! let block = codeblock("cargo add mdcompose")
//!     .with("fenced", Entry::Bool(true))
//!     .with("language", Entry::from("sh"));
//! ```

use crate::entry::Entry;

pub fn h1(content: impl Into<Entry>) -> Entry {
    Entry::tagged("h1", content.into())
}

pub fn h2(content: impl Into<Entry>) -> Entry {
    Entry::tagged("h2", content.into())
}

pub fn h3(content: impl Into<Entry>) -> Entry {
    Entry::tagged("h3", content.into())
}

pub fn h4(content: impl Into<Entry>) -> Entry {
    Entry::tagged("h4", content.into())
}

pub fn h5(content: impl Into<Entry>) -> Entry {
    Entry::tagged("h5", content.into())
}

pub fn h6(content: impl Into<Entry>) -> Entry {
    Entry::tagged("h6", content.into())
}

pub fn bold(content: impl Into<Entry>) -> Entry {
    Entry::tagged("bold", content.into())
}

pub fn italic(content: impl Into<Entry>) -> Entry {
    Entry::tagged("italic", content.into())
}

pub fn strikethrough(content: impl Into<Entry>) -> Entry {
    Entry::tagged("strikethrough", content.into())
}

pub fn highlight(content: impl Into<Entry>) -> Entry {
    Entry::tagged("highlight", content.into())
}

pub fn sub(content: impl Into<Entry>) -> Entry {
    Entry::tagged("sub", content.into())
}

pub fn sup(content: impl Into<Entry>) -> Entry {
    Entry::tagged("sup", content.into())
}

pub fn code(content: impl Into<Entry>) -> Entry {
    Entry::tagged("code", content.into())
}

pub fn codeblock(content: impl Into<Entry>) -> Entry {
    Entry::tagged("codeblock", content.into())
}

pub fn blockquote(content: Vec<Entry>) -> Entry {
    Entry::tagged("blockquote", Entry::Seq(content))
}

pub fn ul(items: Vec<Entry>) -> Entry {
    Entry::tagged("ul", Entry::Seq(items))
}

pub fn ol(items: Vec<Entry>) -> Entry {
    Entry::tagged("ol", Entry::Seq(items))
}

pub fn dl(items: Vec<Entry>) -> Entry {
    Entry::tagged("dl", Entry::Seq(items))
}

/// A description-list term, for use inside [`dl`].
pub fn dt(content: impl Into<Entry>) -> Entry {
    Entry::tagged("dt", content.into())
}

/// A description-list description, for use inside [`dl`].
pub fn dd(content: impl Into<Entry>) -> Entry {
    Entry::tagged("dd", content.into())
}

pub fn tasks(items: Vec<Entry>) -> Entry {
    Entry::tagged("tasks", Entry::Seq(items))
}

/// A task-list item with completion state, for use inside [`tasks`].
pub fn task(content: impl Into<Entry>, completed: bool) -> Entry {
    Entry::tagged("task", content.into()).with("completed", Entry::Bool(completed))
}

pub fn text(content: Vec<Entry>) -> Entry {
    Entry::tagged("text", Entry::Seq(content))
}

pub fn table(columns: Vec<Entry>, rows: Vec<Entry>) -> Entry {
    Entry::tagged(
        "table",
        Entry::tagged("columns", Entry::Seq(columns)).with("rows", Entry::Seq(rows)),
    )
}

pub fn link(source: impl Into<String>) -> Entry {
    Entry::tagged("link", Entry::Str(source.into()))
}

pub fn img(source: impl Into<String>, alt: impl Into<Entry>) -> Entry {
    Entry::tagged(
        "img",
        Entry::tagged("source", Entry::Str(source.into())).with("alt", alt.into()),
    )
}

pub fn emoji(name: impl Into<String>) -> Entry {
    Entry::tagged("emoji", Entry::Str(name.into()))
}

pub fn hr() -> Entry {
    Entry::tagged("hr", Entry::Bool(true))
}

pub fn footnote(id: impl Into<String>, content: Entry) -> Entry {
    Entry::tagged(
        "footnote",
        Entry::tagged("id", Entry::Str(id.into())).with("content", content),
    )
}
