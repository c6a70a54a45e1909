//! Links and images.

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::render_inline;
use super::options::RenderOptions;
use super::Rendered;

pub fn render_link(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let settings = entry.get("link").ok_or(Error::ShapeMismatch("link"))?;

    let (source, text, title) = match settings {
        Entry::Str(source) => (source.clone(), None, None),
        Entry::Record(record) => {
            let source = record
                .get("source")
                .and_then(Entry::as_str)
                .ok_or_else(|| Error::InvalidEntry("link requires a source".to_string()))?;
            let text = match record.get("text") {
                Some(text) => Some(render_inline(text, options)?),
                None => None,
            };
            let title = record.get("title").and_then(Entry::as_str).map(String::from);
            (source.to_string(), text, title)
        }
        _ => {
            return Err(Error::InvalidEntry(
                "link must be a source string or a settings record".to_string(),
            ));
        }
    };

    let text = text.unwrap_or_else(|| source.clone());
    let href = encode_spaces(&source);
    let markdown = match title {
        Some(title) => format!("[{text}]({href} \"{title}\")"),
        None => format!("[{text}]({href})"),
    };
    Ok(Rendered::Inline(markdown))
}

pub fn render_image(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let settings = entry.get("img").ok_or(Error::ShapeMismatch("img"))?;

    let (source, alt, title) = match settings {
        Entry::Str(source) => (source.clone(), None, None),
        Entry::Record(record) => {
            let source = record
                .get("source")
                .and_then(Entry::as_str)
                .ok_or_else(|| Error::InvalidEntry("img requires a source".to_string()))?;
            let alt = match record.get("alt") {
                Some(alt) => Some(render_inline(alt, options)?),
                None => None,
            };
            let title = record.get("title").and_then(Entry::as_str).map(String::from);
            (source.to_string(), alt, title)
        }
        _ => {
            return Err(Error::InvalidEntry(
                "img must be a source string or a settings record".to_string(),
            ));
        }
    };

    let alt = alt.unwrap_or_default();
    let href = encode_spaces(&source);
    let markdown = match title {
        Some(title) => format!("![{alt}]({href} \"{title}\")"),
        None => format!("![{alt}]({href})"),
    };
    Ok(Rendered::Inline(markdown))
}

fn encode_spaces(source: &str) -> String {
    source.replace(' ', "%20")
}
