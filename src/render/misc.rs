//! Small constructs: rich text, emoji, horizontal rules, description lists.

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::render_inline;
use super::options::RenderOptions;
use super::Rendered;

/// Rich text: a grouping construct whose content (usually a sequence of
/// inline entries) concatenates without added whitespace.
pub fn render_text(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let content = entry.get("text").ok_or(Error::ShapeMismatch("text"))?;
    Ok(Rendered::Inline(render_inline(content, options)?))
}

pub fn render_emoji(entry: &Entry, _options: &RenderOptions) -> Result<Rendered> {
    let name = entry
        .get("emoji")
        .and_then(Entry::as_str)
        .ok_or(Error::ShapeMismatch("emoji"))?;
    Ok(Rendered::Inline(format!(":{name}:")))
}

pub fn render_horizontal_rule(entry: &Entry, _options: &RenderOptions) -> Result<Rendered> {
    entry.get("hr").ok_or(Error::ShapeMismatch("hr"))?;
    Ok(Rendered::Block("---".to_string()))
}

/// Description lists: sequences of `{dt}` terms and `{dd}` descriptions.
///
/// Markdown mode emits `term` / `: description` groups separated by blank
/// lines; HTML mode emits `<dl>` markup with 4-space inner indentation.
pub fn render_description_list(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let items = entry
        .get("dl")
        .and_then(Entry::as_seq)
        .ok_or(Error::ShapeMismatch("dl"))?;
    let html = entry
        .get("html")
        .and_then(Entry::as_bool)
        .unwrap_or(options.use_description_list_html);

    let mut lines = Vec::new();
    if html {
        lines.push("<dl>".to_string());
        for item in items {
            if let Some(term) = item.get("dt") {
                lines.push(format!("    <dt>{}</dt>", render_inline(term, options)?));
            } else if let Some(description) = item.get("dd") {
                lines.push(format!(
                    "    <dd>{}</dd>",
                    render_inline(description, options)?
                ));
            }
        }
        lines.push("</dl>".to_string());
    } else {
        for item in items {
            if let Some(term) = item.get("dt") {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(render_inline(term, options)?);
            } else if let Some(description) = item.get("dd") {
                lines.push(format!(": {}", render_inline(description, options)?));
            }
        }
    }
    Ok(Rendered::Block(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{bold, dd, dl, dt, emoji, hr, text};

    #[test]
    fn test_text_concatenates_segments() {
        let options = RenderOptions::default();
        let entry = text(vec!["Hello ".into(), bold("world"), "!".into()]);
        assert_eq!(
            render_text(&entry, &options).unwrap().text(),
            "Hello **world**!"
        );
    }

    #[test]
    fn test_emoji() {
        let options = RenderOptions::default();
        assert_eq!(
            render_emoji(&emoji("joy"), &options).unwrap().text(),
            ":joy:"
        );
    }

    #[test]
    fn test_horizontal_rule() {
        let options = RenderOptions::default();
        let rendered = render_horizontal_rule(&hr(), &options).unwrap();
        assert_eq!(rendered.text(), "---");
        assert!(rendered.is_block());
    }

    #[test]
    fn test_description_list_markdown() {
        let options = RenderOptions::default();
        let entry = dl(vec![
            dt("Term"),
            dd("First meaning"),
            dd("Second meaning"),
            dt("Other"),
            dd("Meaning"),
        ]);
        assert_eq!(
            render_description_list(&entry, &options).unwrap().text(),
            "Term\n: First meaning\n: Second meaning\n\nOther\n: Meaning"
        );
    }

    #[test]
    fn test_description_list_html() {
        let options = RenderOptions::default();
        let entry = dl(vec![dt("Term"), dd("Meaning")]).with("html", Entry::Bool(true));
        assert_eq!(
            render_description_list(&entry, &options).unwrap().text(),
            "<dl>\n    <dt>Term</dt>\n    <dd>Meaning</dd>\n</dl>"
        );
    }

    #[test]
    fn test_description_list_document_html_default() {
        let options = RenderOptions {
            use_description_list_html: true,
            ..RenderOptions::default()
        };
        let entry = dl(vec![dt("T"), dd("D")]);
        assert!(render_description_list(&entry, &options)
            .unwrap()
            .text()
            .starts_with("<dl>"));
    }
}
