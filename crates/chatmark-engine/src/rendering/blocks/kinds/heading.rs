use crate::rendering::inline::process_inline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

/// ATX heading, levels 1 to 3 only.
pub struct Heading;

impl Heading {
    /// Markers in match precedence order. `### ` must be tried before `## `
    /// and `# ` or deeper headings would be taken for shallower ones.
    pub const MARKERS: [(&'static str, HeadingLevel); 3] = [
        ("### ", HeadingLevel::H3),
        ("## ", HeadingLevel::H2),
        ("# ", HeadingLevel::H1),
    ];

    /// Splits a trimmed line into its level and the text after the marker.
    pub fn parse(trimmed: &str) -> Option<(HeadingLevel, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|&(marker, level)| trimmed.strip_prefix(marker).map(|text| (level, text)))
    }

    pub fn render(level: HeadingLevel, text: &str) -> String {
        let tag = level.tag();
        format!("<{tag}>{}</{tag}>", process_inline(text))
    }
}
