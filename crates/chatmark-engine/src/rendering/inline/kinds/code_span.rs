use std::sync::LazyLock;

use regex::Regex;

static TICKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid code span regex"));

/// Inline code: `` `text` `` becomes `<code>text</code>`.
///
/// Code spans are not a raw zone here: later pipeline steps still run over
/// their content.
pub struct CodeSpan;

impl CodeSpan {
    pub fn apply(text: &str) -> String {
        TICKS.replace_all(text, "<code>${1}</code>").into_owned()
    }
}
