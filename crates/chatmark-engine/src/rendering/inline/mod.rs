//! # Inline Rendering
//!
//! Regex substitution over a single line, applied after HTML escaping.
//!
//! ## Pipeline
//!
//! The order is fixed and changing it changes output for pathological input:
//!
//! 1. escape `&`, `<`, `>` (the only injection defence, always first)
//! 2. code spans
//! 3. strong (`**` then `__`)
//! 4. emphasis (`*` then `_`), rejecting matches that still hold a double marker
//! 5. links
//!
//! ## Modules
//!
//! - **`kinds`**: one type per construct, each owning its pattern
//! - **`pipeline`**: `process_inline()` main entry point and `escape_html()`
//!
//! Unmatched markers are left as literal (escaped) text. Emphasis that
//! overlaps strong can produce mis-nested tags such as
//! `<em>a<strong>b</em>c</strong>`; this is an accepted limitation of the
//! pattern-based approach.

pub mod kinds;
pub mod pipeline;

pub use pipeline::{escape_html, process_inline};
