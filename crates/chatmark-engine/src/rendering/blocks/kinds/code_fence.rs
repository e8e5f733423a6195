use crate::rendering::inline::escape_html;

/// Fenced code block with owned delimiter constant.
///
/// Fence contents are a raw zone: they are escaped but never classified or
/// inline-processed.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether a (trimmed) line opens or closes a fence.
    ///
    /// Anything after the backticks, such as a language tag, is ignored.
    pub fn is_fence(trimmed: &str) -> bool {
        trimmed.starts_with(Self::FENCE)
    }

    /// Renders buffered raw lines as a single `<pre><code>` element.
    pub fn render(lines: &[String]) -> String {
        format!("<pre><code>{}</code></pre>", escape_html(&lines.join("\n")))
    }
}
