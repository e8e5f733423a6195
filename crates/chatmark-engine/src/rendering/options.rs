use serde::{Deserialize, Serialize};

/// Knobs for [`render_with`](super::render_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render numbered items inside `<ol>` instead of `<ul>`.
    ///
    /// Off by default, which keeps the historical output where every list is
    /// a `<ul>`.
    pub ordered_lists: bool,
}
