//! Post-render correction of mid-word underscore emphasis.
//!
//! Underscores only delimit emphasis at word boundaries; asterisks work
//! mid-word too. This pass rewrites underscore delimiter pairs that touch
//! word text on exactly one outer side to the equivalent asterisk run.
//! Runs are handled longest first so a shorter pattern never matches
//! inside a longer delimiter. It is a best-effort textual repair on the
//! final string, not a re-render.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Each candidate starts at the beginning of a whitespace-delimited token,
// so plain snake_case text never matches mid-identifier.
static TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)([^\s_]*)___([^_]+)___([^\s_]*)").expect("valid regex")
});
static DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)([^\s_]*)__([^_]+)__([^\s_]*)").expect("valid regex")
});
static SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)([^\s_]*)_([^_]+)_([^\s_]*)").expect("valid regex")
});

/// Rewrite ambiguous mid-word underscore emphasis to asterisks.
pub fn correct_mid_word_emphasis(text: &str) -> String {
    let text = rewrite(&TRIPLE, text, "***");
    let text = rewrite(&DOUBLE, &text, "**");
    rewrite(&SINGLE, &text, "*")
}

fn rewrite(pattern: &Regex, text: &str, marker: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            let boundary = &caps[1];
            let (pre, mid, post) = (&caps[2], &caps[3], &caps[4]);
            // Word text on exactly one outer side marks the ambiguous
            // case. Both sides means the underscores were plain text;
            // neither side means the emphasis was already valid.
            if pre.is_empty() != post.is_empty() {
                format!("{boundary}{pre}{marker}{mid}{marker}{post}")
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
