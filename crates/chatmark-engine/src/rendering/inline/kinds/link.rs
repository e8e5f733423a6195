use std::sync::LazyLock;

use regex::{Captures, Regex};

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

/// `[label](url)` becomes an anchor opening in a new tab.
///
/// The URL is otherwise emitted as it stands after the earlier pipeline steps:
/// the scheme is not validated, so `javascript:` links pass through. The one
/// change is that double quotes become `&quot;`, so the `href` attribute cannot
/// be closed early.
pub struct Link;

impl Link {
    pub fn apply(text: &str) -> String {
        LINK.replace_all(text, |caps: &Captures<'_>| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                caps[2].replace('"', "&quot;"),
                &caps[1]
            )
        })
        .into_owned()
    }
}
