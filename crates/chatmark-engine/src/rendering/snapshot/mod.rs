//! # Output Checking Support
//!
//! Utilities for testing the renderer via invariant checks on its output.
//!
//! - **`invariants`**: asserts a fragment only uses the permitted tags, closes
//!   every block element it opens, balances inline elements within their
//!   block, and carries no bare `<`, `>` or `&` in text

pub mod invariants;

pub use invariants::check as invariants;
