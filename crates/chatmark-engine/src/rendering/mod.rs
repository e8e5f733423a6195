//! # Rendering
//!
//! Converts one chat message of markdown-ish text into a safe HTML fragment.
//!
//! The pipeline is a single pass over `\n`-separated lines:
//! [`blocks`] classifies each line and builds block pieces, [`inline`]
//! renders spans within a line, and [`html`] groups paragraph lines and
//! concatenates the result.
//!
//! Rendering is total: any input, including `None`, produces well-formed
//! output, and empty input produces `<p></p>`.

pub mod blocks;
pub mod html;
pub mod inline;
pub mod options;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, MarkdownLineClassifier};

pub use inline::{escape_html, process_inline};
pub use options::RenderOptions;

/// Renders raw message text with default options.
///
/// Accepts `&str` or `Option<&str>`; absent text renders like empty text.
pub fn render<'a>(raw: impl Into<Option<&'a str>>) -> String {
    render_with(raw, &RenderOptions::default())
}

/// Renders raw message text with explicit options.
///
/// Same contract as [`render`]: never fails, and returns `<p></p>` when there
/// is no content.
pub fn render_with<'a>(raw: impl Into<Option<&'a str>>, options: &RenderOptions) -> String {
    let raw = raw.into().unwrap_or_default();
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(options);

    for line in raw.split('\n') {
        builder.push(line, classifier.classify(line));
    }

    html::assemble(&builder.finish())
}
