use super::kinds::{CodeFence, Heading, HeadingLevel, ListItem, ListKind};

/// Classification of a single line containing only local facts.
///
/// Borrowed text is the trimmed line with any block marker removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Fence,
    Heading { level: HeadingLevel, text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    Blank,
    Text(&'a str),
}

/// Classifies individual lines for the block phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a raw line (without its `\n`).
    ///
    /// Precedence: fence, heading, list item, blank, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        let class = if CodeFence::is_fence(trimmed) {
            LineClass::Fence
        } else if let Some((level, text)) = Heading::parse(trimmed) {
            LineClass::Heading { level, text }
        } else if let Some((kind, text)) = ListItem::parse(trimmed) {
            LineClass::ListItem { kind, text }
        } else if trimmed.is_empty() {
            LineClass::Blank
        } else {
            LineClass::Text(trimmed)
        };

        log::trace!("classified {line:?} as {class:?}");
        class
    }
}
