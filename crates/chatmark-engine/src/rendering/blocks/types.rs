/// One unit emitted by the block builder, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Finished block-level HTML (heading, list or code block).
    Block(String),
    /// An inline-processed text line waiting to be grouped into a paragraph.
    ParagraphLine(String),
    /// A blank line. Ends the pending paragraph, emits nothing itself.
    ParagraphBreak,
}

