//! Header rendering (h1–h6).
//!
//! h1 and h2 support underline mode (setext-style `=`/`-` lines sized to
//! the rendered text); all levels support an optional `{#id}` suffix.

use unicode_width::UnicodeWidthStr;

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::render_inline;
use super::options::RenderOptions;
use super::Rendered;

pub fn render_h1(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    render_header(entry, options, 1, "h1")
}

pub fn render_h2(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    render_header(entry, options, 2, "h2")
}

pub fn render_h3(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    render_header(entry, options, 3, "h3")
}

pub fn render_h4(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    render_header(entry, options, 4, "h4")
}

pub fn render_h5(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    render_header(entry, options, 5, "h5")
}

pub fn render_h6(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    render_header(entry, options, 6, "h6")
}

fn render_header(
    entry: &Entry,
    options: &RenderOptions,
    level: usize,
    key: &'static str,
) -> Result<Rendered> {
    let content = entry.get(key).ok_or(Error::ShapeMismatch(key))?;
    let mut text = render_inline(content, options)?;

    if let Some(id) = entry.get("id").and_then(Entry::as_str) {
        text = format!("{text} {{#{id}}}");
    }

    // Only h1/h2 have a setext form; h3-h6 never underline.
    let underline = match level {
        1 => entry
            .get("underline")
            .and_then(Entry::as_bool)
            .unwrap_or(options.use_h1_underlining),
        2 => entry
            .get("underline")
            .and_then(Entry::as_bool)
            .unwrap_or(options.use_h2_underlining),
        _ => false,
    };

    if underline {
        let line_char = if level == 1 { '=' } else { '-' };
        // Measured on the final rendered line, emphasis markup included.
        let width = text.as_str().width();
        let underline: String = std::iter::repeat_n(line_char, width).collect();
        Ok(Rendered::Block(format!("{text}\n{underline}")))
    } else {
        Ok(Rendered::Block(format!("{} {text}", "#".repeat(level))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{bold, h1, h2, h3};

    #[test]
    fn test_header_levels() {
        let options = RenderOptions::default();
        assert_eq!(
            render_h1(&h1("Hello, world!"), &options).unwrap().text(),
            "# Hello, world!"
        );
        assert_eq!(render_h3(&h3("Deep"), &options).unwrap().text(), "### Deep");
    }

    #[test]
    fn test_header_is_block_level() {
        let options = RenderOptions::default();
        assert!(render_h1(&h1("x"), &options).unwrap().is_block());
    }

    #[test]
    fn test_rich_header_content() {
        let options = RenderOptions::default();
        let entry = h1(Entry::Seq(vec![Entry::from("very "), bold("important")]));
        assert_eq!(
            render_h1(&entry, &options).unwrap().text(),
            "# very **important**"
        );
    }

    #[test]
    fn test_header_id_suffix() {
        let options = RenderOptions::default();
        let entry = h2("Install").with("id", Entry::from("install"));
        assert_eq!(
            render_h2(&entry, &options).unwrap().text(),
            "## Install {#install}"
        );
    }

    #[test]
    fn test_h1_underline_matches_rendered_width() {
        let options = RenderOptions::default();
        let entry = h1(Entry::Seq(vec![bold("Hi")])).with("underline", Entry::Bool(true));
        // "**Hi**" is six characters once emphasis markup is counted.
        assert_eq!(render_h1(&entry, &options).unwrap().text(), "**Hi**\n======");
    }

    #[test]
    fn test_document_level_underlining() {
        let options = RenderOptions {
            use_h2_underlining: true,
            ..RenderOptions::default()
        };
        assert_eq!(render_h2(&h2("Sub"), &options).unwrap().text(), "Sub\n---");
    }

    #[test]
    fn test_local_underline_overrides_document() {
        let options = RenderOptions {
            use_h1_underlining: true,
            ..RenderOptions::default()
        };
        let entry = h1("Plain").with("underline", Entry::Bool(false));
        assert_eq!(render_h1(&entry, &options).unwrap().text(), "# Plain");
    }

    #[test]
    fn test_h3_never_underlines() {
        let options = RenderOptions::default();
        let entry = h3("Deep").with("underline", Entry::Bool(true));
        assert_eq!(render_h3(&entry, &options).unwrap().text(), "### Deep");
    }

    #[test]
    fn test_wrong_shape_fails() {
        let options = RenderOptions::default();
        let err = render_h1(&h2("x"), &options).unwrap_err();
        assert_eq!(err.to_string(), "Entry is not a h1 entry.");
    }
}
