use std::sync::LazyLock;

use regex::Regex;

static STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid strong regex"));
static UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("valid strong regex"));

/// `**text**` and `__text__` become `<strong>text</strong>`.
pub struct Strong;

impl Strong {
    pub fn apply(text: &str) -> String {
        let starred = STARS.replace_all(text, "<strong>${1}</strong>");
        UNDERSCORES
            .replace_all(&starred, "<strong>${1}</strong>")
            .into_owned()
    }
}
