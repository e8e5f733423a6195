use std::collections::BTreeMap;

const BLOCK_TAGS: [&str; 8] = ["h1", "h2", "h3", "p", "ul", "ol", "li", "pre"];
const INLINE_TAGS: [&str; 3] = ["code", "strong", "em"];
const ENTITIES: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];
const ANCHOR_OPEN: &str = "<a href=\"";
const ANCHOR_CLOSE: &str = "\" target=\"_blank\" rel=\"noopener noreferrer\">";

/// Net open count per inline tag within one block.
type Balance<'a> = BTreeMap<&'a str, i32>;

/// Panics unless `html` is a fragment the renderer is allowed to produce.
///
/// Block tags must nest strictly. Inline tags only have to balance within
/// the block that contains them: they may mis-nest with each other, and
/// because emphasis runs before links, `<code>`, `<strong>` and `<em>` may
/// appear inside an `href` value, with their partner inside or outside it.
pub fn check(html: &str) {
    let mut blocks: Vec<&str> = vec![];
    // One balance per block level; index 0 is the top level.
    let mut inline: Vec<Balance<'_>> = vec![Balance::new()];
    let mut rest = html;

    while let Some(i) = rest.find(&['<', '>', '&'][..]) {
        let tail = &rest[i..];
        if tail.starts_with('>') {
            panic!("bare '>' in text: {html}");
        }
        if tail.starts_with('&') {
            check_entity(tail, html);
            rest = &tail[1..];
            continue;
        }

        let frame = inline.last_mut().expect("top level frame");
        if let Some(after) = tail.strip_prefix(ANCHOR_OPEN) {
            let end = after
                .find(ANCHOR_CLOSE)
                .unwrap_or_else(|| panic!("unexpected anchor attributes in: {html}"));
            check_href(&after[..end], frame, html);
            *frame.entry("a").or_default() += 1;
            rest = &after[end + ANCHOR_CLOSE.len()..];
            continue;
        }

        let end = tail
            .find('>')
            .unwrap_or_else(|| panic!("unterminated tag in: {html}"));
        let tag = &tail[1..end];
        rest = &tail[end + 1..];

        if let Some(name) = tag.strip_prefix('/') {
            if BLOCK_TAGS.contains(&name) {
                assert_eq!(blocks.pop(), Some(name), "mis-nested </{name}> in: {html}");
                let open = inline.pop().unwrap_or_default();
                assert!(
                    open.values().all(|n| *n == 0),
                    "unbalanced inline {open:?} before </{name}> in: {html}"
                );
            } else {
                assert!(
                    INLINE_TAGS.contains(&name) || name == "a",
                    "unexpected </{name}> in: {html}"
                );
                *frame.entry(name).or_default() -= 1;
            }
            continue;
        }

        assert!(!tag.contains(' '), "unexpected attributes on <{tag}> in: {html}");
        if BLOCK_TAGS.contains(&tag) {
            if tag == "li" {
                assert!(
                    matches!(blocks.last(), Some(&"ul") | Some(&"ol")),
                    "<li> outside a list in: {html}"
                );
            }
            blocks.push(tag);
            inline.push(Balance::new());
        } else {
            assert!(INLINE_TAGS.contains(&tag), "unexpected <{tag}> in: {html}");
            *frame.entry(tag).or_default() += 1;
        }
    }

    assert!(blocks.is_empty(), "unclosed {blocks:?} in: {html}");
    assert!(
        inline.iter().all(|b| b.values().all(|n| *n == 0)),
        "unbalanced inline {inline:?} in: {html}"
    );
}

fn check_entity(tail: &str, html: &str) {
    assert!(
        ENTITIES.iter().any(|e| tail.starts_with(e)),
        "bare '&' in text: {html}"
    );
}

/// Walks an `href` value, counting any inline tags the earlier pipeline
/// steps left in it.
fn check_href<'a>(href: &'a str, frame: &mut Balance<'a>, html: &str) {
    let mut rest = href;
    while let Some(i) = rest.find(&['<', '>', '&'][..]) {
        let tail = &rest[i..];
        if tail.starts_with('>') {
            panic!("bare '>' in href: {html}");
        }
        if tail.starts_with('&') {
            check_entity(tail, html);
            rest = &tail[1..];
            continue;
        }

        let end = tail
            .find('>')
            .unwrap_or_else(|| panic!("unterminated tag in href: {html}"));
        let tag = &tail[1..end];
        let (name, delta) = match tag.strip_prefix('/') {
            Some(name) => (name, -1),
            None => (tag, 1),
        };
        assert!(INLINE_TAGS.contains(&name), "unexpected <{tag}> in href: {html}");
        *frame.entry(name).or_default() += delta;
        rest = &tail[end + 1..];
    }
}
