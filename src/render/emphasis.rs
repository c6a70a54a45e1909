//! Inline emphasis renderers: bold, italic, strikethrough, highlight,
//! subscript, superscript.
//!
//! All of these wrap dispatched content between symmetric delimiters, so
//! they nest arbitrarily. Bold and italic take a local `indicator` override
//! (`*` or `_`) falling back to the document default; sub/sup take a local
//! `html` flag switching to tag wrapping.

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::render_inline;
use super::options::RenderOptions;
use super::Rendered;

pub fn render_bold(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry.get("bold").ok_or(Error::ShapeMismatch("bold"))?;
    let indicator = entry
        .get("indicator")
        .and_then(Entry::as_char)
        .unwrap_or(options.bold_indicator);
    let text = render_inline(content, options)?;
    Ok(Rendered::Inline(format!(
        "{indicator}{indicator}{text}{indicator}{indicator}"
    )))
}

pub fn render_italic(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry.get("italic").ok_or(Error::ShapeMismatch("italic"))?;
    let indicator = entry
        .get("indicator")
        .and_then(Entry::as_char)
        .unwrap_or(options.italic_indicator);
    let text = render_inline(content, options)?;
    Ok(Rendered::Inline(format!("{indicator}{text}{indicator}")))
}

pub fn render_strikethrough(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry
        .get("strikethrough")
        .ok_or(Error::ShapeMismatch("strikethrough"))?;
    let text = render_inline(content, options)?;
    Ok(Rendered::Inline(format!("~~{text}~~")))
}

pub fn render_highlight(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry
        .get("highlight")
        .ok_or(Error::ShapeMismatch("highlight"))?;
    let text = render_inline(content, options)?;
    Ok(Rendered::Inline(format!("=={text}==")))
}

pub fn render_subscript(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry.get("sub").ok_or(Error::ShapeMismatch("sub"))?;
    let html = entry
        .get("html")
        .and_then(Entry::as_bool)
        .unwrap_or(options.use_subscript_html);
    let text = render_inline(content, options)?;
    if html {
        Ok(Rendered::Inline(format!("<sub>{text}</sub>")))
    } else {
        Ok(Rendered::Inline(format!("~{text}~")))
    }
}

pub fn render_superscript(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry.get("sup").ok_or(Error::ShapeMismatch("sup"))?;
    let html = entry
        .get("html")
        .and_then(Entry::as_bool)
        .unwrap_or(options.use_superscript_html);
    let text = render_inline(content, options)?;
    if html {
        Ok(Rendered::Inline(format!("<sup>{text}</sup>")))
    } else {
        Ok(Rendered::Inline(format!("^{text}^")))
    }
}
