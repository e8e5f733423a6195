use std::sync::LazyLock;

use regex::Regex;

use crate::rendering::inline::process_inline;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.+)$").expect("valid bullet regex"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").expect("valid numbered regex"));

/// Which marker introduced a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-` or `*`
    Bullet,
    /// `1.`, `23.`, ...
    Numbered,
}

impl ListKind {
    /// Container tag for this kind. Numbered items only get `<ol>` when asked.
    pub fn tag(self, ordered_lists: bool) -> &'static str {
        match self {
            ListKind::Numbered if ordered_lists => "ol",
            _ => "ul",
        }
    }
}

/// List item block type. Markers are stripped and never reach the output.
pub struct ListItem;

impl ListItem {
    /// Matches a trimmed line against the bullet and numbered patterns.
    pub fn parse(trimmed: &str) -> Option<(ListKind, &str)> {
        if let Some(caps) = BULLET.captures(trimmed) {
            return caps.get(1).map(|m| (ListKind::Bullet, m.as_str()));
        }
        NUMBERED
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| (ListKind::Numbered, m.as_str()))
    }

    pub fn render(text: &str) -> String {
        format!("<li>{}</li>", process_inline(text))
    }
}
