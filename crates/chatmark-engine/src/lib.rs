pub mod rendering;

// Re-export key types for easier usage
pub use rendering::{RenderOptions, escape_html, process_inline, render, render_with};
