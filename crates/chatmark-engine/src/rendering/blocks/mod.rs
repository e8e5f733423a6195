//! # Block Rendering
//!
//! Two-phase, line-oriented block handling.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (fence, heading, list item, blank or text) using only local facts
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the one open
//!    leaf (code fence or list) and emits an ordered sequence of `Piece`s
//!
//! ## Modules
//!
//! - **`types`**: `Piece`, the output unit handed to the assembly pass
//! - **`kinds`**: block types owning their delimiters (CodeFence, Heading, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - At most one leaf (fence or list) is open at a time
//! - Fenced code blocks are raw zones: no block or inline processing inside
//! - Unterminated fences and lists are closed at end of input

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::Piece;
