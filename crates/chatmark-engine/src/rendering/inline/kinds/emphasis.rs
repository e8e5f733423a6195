use std::sync::LazyLock;

use regex::{Captures, Regex};

static STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid emphasis regex"));
static UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.+?)_").expect("valid emphasis regex"));

/// `*text*` and `_text_` become `<em>text</em>`.
///
/// Must run after [`Strong`](super::Strong). A match still containing a
/// doubled marker is a strong leftover and is kept as text.
pub struct Emphasis;

impl Emphasis {
    pub fn apply(text: &str) -> String {
        let starred = emphasize(&STAR, "**", text);
        emphasize(&UNDERSCORE, "__", &starred)
    }
}

fn emphasize(re: &Regex, double: &str, text: &str) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        let whole = &caps[0];
        if whole.contains(double) {
            whole.to_string()
        } else {
            format!("<em>{}</em>", &caps[1])
        }
    })
    .into_owned()
}
