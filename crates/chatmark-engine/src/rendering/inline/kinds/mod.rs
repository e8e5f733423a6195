//! # Inline Kinds
//!
//! Each construct owns its regex. The pipeline calls `apply` on each in
//! order and never hardcodes a delimiter itself.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use strong::Strong;
