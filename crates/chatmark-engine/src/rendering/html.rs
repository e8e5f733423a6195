use super::blocks::Piece;

/// Output for input with no content at all.
pub const EMPTY_PARAGRAPH: &str = "<p></p>";

/// Second pass: groups consecutive paragraph lines into `<p>` elements.
///
/// Lines in one paragraph are joined with a single space. A break or a block
/// ends the pending paragraph. Elements are concatenated without separators.
pub fn assemble(pieces: &[Piece]) -> String {
    let mut out = String::new();
    let mut paragraph: Vec<&str> = vec![];

    for piece in pieces {
        match piece {
            Piece::ParagraphLine(line) => paragraph.push(line),
            Piece::ParagraphBreak => flush_paragraph(&mut out, &mut paragraph),
            Piece::Block(html) => {
                flush_paragraph(&mut out, &mut paragraph);
                out.push_str(html);
            }
        }
    }
    flush_paragraph(&mut out, &mut paragraph);

    if out.is_empty() {
        return EMPTY_PARAGRAPH.to_string();
    }
    out
}

fn flush_paragraph(out: &mut String, paragraph: &mut Vec<&str>) {
    if paragraph.is_empty() {
        return;
    }
    out.push_str("<p>");
    out.push_str(&paragraph.join(" "));
    out.push_str("</p>");
    paragraph.clear();
}
