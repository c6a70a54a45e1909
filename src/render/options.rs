//! Document-wide rendering configuration.

use super::compose::Prefix;
use super::registry::Registry;

/// Fence character for fenced code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    Backtick,
    Tilde,
}

impl Fence {
    pub fn character(self) -> char {
        match self {
            Fence::Backtick => '`',
            Fence::Tilde => '~',
        }
    }
}

/// Configuration threaded by value through every recursive render call.
///
/// Entry-level modifiers always take precedence over these document-wide
/// defaults when both are present.
#[derive(Clone)]
pub struct RenderOptions {
    /// The active renderer registry.
    pub renderers: Registry,
    /// Per-line text prepended during composition, used for nesting
    /// indentation and blockquote markers.
    pub prefix: Prefix,
    /// Delimiter character for bold entries without a local `indicator`.
    pub bold_indicator: char,
    /// Delimiter character for italic entries without a local `indicator`.
    pub italic_indicator: char,
    /// Bullet for unordered list items without a local `indicator`.
    pub unordered_list_item_indicator: char,
    /// Underline h1 headers with `=` instead of prefixing `#`.
    pub use_h1_underlining: bool,
    /// Underline h2 headers with `-` instead of prefixing `##`.
    pub use_h2_underlining: bool,
    /// Render subscript with `<sub>` tags instead of `~` delimiters.
    pub use_subscript_html: bool,
    /// Render superscript with `<sup>` tags instead of `^` delimiters.
    pub use_superscript_html: bool,
    /// Render description lists with `<dl>` markup instead of Markdown.
    pub use_description_list_html: bool,
    /// Fence code blocks by default. Entries with a local `fenced` value
    /// override this.
    pub use_codeblock_fencing: Option<Fence>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            renderers: Registry::default(),
            prefix: Prefix::default(),
            bold_indicator: '*',
            italic_indicator: '*',
            unordered_list_item_indicator: '-',
            use_h1_underlining: false,
            use_h2_underlining: false,
            use_subscript_html: false,
            use_superscript_html: false,
            use_description_list_html: false,
            use_codeblock_fencing: None,
        }
    }
}

impl RenderOptions {
    /// Copy of these options with a different composition prefix.
    ///
    /// Renderers that compose nested content (blockquotes, list items) use
    /// this to install their own prefix; the ambient prefix is applied one
    /// level up, to their whole rendered output.
    pub fn with_prefix(&self, prefix: Prefix) -> Self {
        let mut options = self.clone();
        options.prefix = prefix;
        options
    }
}
