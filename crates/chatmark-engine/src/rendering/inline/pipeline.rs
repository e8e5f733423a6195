use std::borrow::Cow;

use super::kinds::{CodeSpan, Emphasis, Link, Strong};

/// Substitution steps in application order.
const PIPELINE: [fn(&str) -> String; 4] =
    [CodeSpan::apply, Strong::apply, Emphasis::apply, Link::apply];

/// Escapes `&`, `<` and `>`. Quotes are left alone.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Renders the inline markup of a single line to HTML.
///
/// Escaping happens before any substitution, so text can never introduce
/// tags of its own. Never fails: unmatched markers stay literal.
pub fn process_inline(line: &str) -> String {
    PIPELINE
        .iter()
        .fold(escape_html(line).into_owned(), |acc, step| step(&acc))
}
