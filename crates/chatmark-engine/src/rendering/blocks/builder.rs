use crate::rendering::{RenderOptions, inline::process_inline};

use super::{
    classify::LineClass,
    kinds::{CodeFence, Heading, ListItem, ListKind},
    types::Piece,
};

#[derive(Debug)]
enum LeafState {
    None,
    Fence {
        lines: Vec<String>,
    },
    List {
        tag: &'static str,
        items: Vec<String>,
    },
}

pub struct BlockBuilder<'o> {
    options: &'o RenderOptions,
    leaf: LeafState,
    out: Vec<Piece>,
}

impl<'o> BlockBuilder<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self {
            options,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    /// Feeds one line. `raw` is the untouched line, kept verbatim inside fences.
    pub fn push(&mut self, raw: &str, class: LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(raw, class);
            return;
        }

        match class {
            LineClass::Fence => {
                self.flush_list();
                self.leaf = LeafState::Fence { lines: vec![] };
            }
            LineClass::Heading { level, text } => {
                self.flush_list();
                self.out.push(Piece::Block(Heading::render(level, text)));
            }
            LineClass::ListItem { kind, text } => self.extend_list(kind, text),
            LineClass::Blank => {
                self.flush_list();
                self.out.push(Piece::ParagraphBreak);
            }
            LineClass::Text(text) => {
                self.flush_list();
                self.out.push(Piece::ParagraphLine(process_inline(text)));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Piece> {
        // EOF flush
        if matches!(self.leaf, LeafState::List { .. }) {
            log::trace!("closing list at end of input");
        }
        self.flush_list();
        if self.in_fence() {
            log::debug!("closing unterminated code fence at end of input");
        }
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, raw: &str, class: LineClass<'_>) {
        if class == LineClass::Fence {
            self.flush_fence();
        } else if let LeafState::Fence { lines } = &mut self.leaf {
            lines.push(raw.to_string());
        }
    }

    fn extend_list(&mut self, kind: ListKind, text: &str) {
        let tag = kind.tag(self.options.ordered_lists);
        let item = ListItem::render(text);

        if let LeafState::List { tag: open, items } = &mut self.leaf
            && *open == tag
        {
            items.push(item);
            return;
        }

        // A different list kind closes the open one first.
        self.flush_list();
        self.leaf = LeafState::List {
            tag,
            items: vec![item],
        };
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::List { tag, items } = prev {
            self.out
                .push(Piece::Block(format!("<{tag}>{}</{tag}>", items.concat())));
        } else {
            self.leaf = prev; // put back a non-list leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { lines } = prev {
            self.out.push(Piece::Block(CodeFence::render(&lines)));
        } else {
            self.leaf = prev;
        }
    }
}
