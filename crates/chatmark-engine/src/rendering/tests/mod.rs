//! End-to-end tests for `render`.
//!
//! Every output is also run through the invariant checker.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::rendering::{RenderOptions, render, render_with, snapshot};

fn checked(md: &str) -> String {
    let html = render(md);
    snapshot::invariants(&html);
    html
}

#[test]
fn empty_and_absent_input_render_empty_paragraph() {
    assert_eq!(render(""), "<p></p>");
    assert_eq!(render(None), "<p></p>");
}

#[rstest]
#[case("   ")]
#[case("\n\n\n")]
#[case(" \n\t\n ")]
fn whitespace_only_renders_empty_paragraph(#[case] md: &str) {
    assert_eq!(checked(md), "<p></p>");
}

#[rstest]
#[case("# Title", "<h1>Title</h1>")]
#[case("## Title", "<h2>Title</h2>")]
#[case("### Title", "<h3>Title</h3>")]
#[case("#### Title", "<p>#### Title</p>")]
#[case("**bold** and *italic*", "<p><strong>bold</strong> and <em>italic</em></p>")]
#[case("- a\n- b\n", "<ul><li>a</li><li>b</li></ul>")]
#[case("1. a\n2. b", "<ul><li>a</li><li>b</li></ul>")]
#[case("* a\n* b", "<ul><li>a</li><li>b</li></ul>")]
#[case("```\ncode <line>\n```", "<pre><code>code &lt;line&gt;</code></pre>")]
#[case("```\n**not bold**\n```", "<pre><code>**not bold**</code></pre>")]
#[case("one\ntwo", "<p>one two</p>")]
#[case("one\n\ntwo", "<p>one</p><p>two</p>")]
#[case("<b>hi</b>", "<p>&lt;b&gt;hi&lt;/b&gt;</p>")]
fn renders_expected_html(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(checked(md), expected);
}

#[test]
fn javascript_urls_are_emitted_verbatim() {
    // No scheme validation: callers must not rely on the renderer for that.
    let html = checked("[x](javascript:alert(1))");
    assert_snapshot!(html, @r#"<p><a href="javascript:alert(1" target="_blank" rel="noopener noreferrer">x</a>)</p>"#);
}

#[test]
fn heading_then_paragraph_then_list() {
    let html = checked("# Plan\nFirst we **build**.\nThen we `test`.\n- one\n- two");
    assert_snapshot!(html, @"<h1>Plan</h1><p>First we <strong>build</strong>. Then we <code>test</code>.</p><ul><li>one</li><li>two</li></ul>");
}

#[test]
fn paragraph_is_split_by_code_block() {
    let html = checked("before\n```\nx < y\n```\nafter");
    assert_snapshot!(html, @"<p>before</p><pre><code>x &lt; y</code></pre><p>after</p>");
}

#[test]
fn code_block_keeps_inner_newlines() {
    assert_eq!(
        checked("```rust\nfn main() {\n    println!(\"hi\");\n}\n```"),
        "<pre><code>fn main() {\n    println!(\"hi\");\n}</code></pre>"
    );
}

#[test]
fn unterminated_fence_runs_to_end_of_input() {
    assert_eq!(
        checked("text\n```\n# still code\n- still code"),
        "<p>text</p><pre><code># still code\n- still code</code></pre>"
    );
}

#[test]
fn unterminated_list_is_closed() {
    assert_eq!(checked("intro\n- a\n- b"), "<p>intro</p><ul><li>a</li><li>b</li></ul>");
}

#[test]
fn list_items_get_inline_markup() {
    assert_eq!(
        checked("- **a** [b](https://b.test)"),
        r#"<ul><li><strong>a</strong> <a href="https://b.test" target="_blank" rel="noopener noreferrer">b</a></li></ul>"#
    );
}

#[test]
fn numbered_lists_use_ol_when_enabled() {
    let options = RenderOptions {
        ordered_lists: true,
    };
    let html = render_with("1. a\n2. b\n\n- c", &options);
    snapshot::invariants(&html);
    assert_eq!(html, "<ol><li>a</li><li>b</li></ol><ul><li>c</li></ul>");
}

#[test]
fn options_do_not_change_bullet_lists() {
    let options = RenderOptions {
        ordered_lists: true,
    };
    assert_eq!(render_with("- a", &options), render("- a"));
}

#[test]
fn rendering_is_deterministic() {
    let md = "# T\n*a**b*c**d*\n- [x](y)\n```\n<z>\n";
    assert_eq!(render(md), render(md));
}

#[rstest]
#[case("*a**b*c**d*")]
#[case("**unclosed *x*")]
#[case("[unclosed](")]
#[case("a & b < c > d")]
#[case("<script>alert('x')</script>")]
#[case("[a\"b](\"><script>)")]
#[case("- `code` *em* __strong__\n1. [l](u)\n\n## h *i*")]
#[case("```\n```\n```")]
#[case("&amp; already escaped")]
#[case("line\r\nwith crlf")]
#[case("🦀 *unicode* ünïcödé `ß`")]
#[case("See [docs](https://docs.rs/foo_bar_baz).")]
#[case("[a](x_y) and z_")]
#[case("_x [a](y_z)")]
#[case("[**a](b**)")]
#[case("- [c](`a`_b_)\n# [h](*u*)")]
fn output_is_always_well_formed(#[case] md: &str) {
    checked(md);
}

/// Every three-token combination of markup fragments renders well-formed.
#[test]
fn generated_input_is_always_well_formed() {
    const TOKENS: [&str; 20] = [
        "a", " ", "*", "**", "_", "__", "`", "[x](", "](", ")", "[", "<", ">", "&", "\"",
        "- ", "1. ", "# ", "```", "\n",
    ];

    for a in TOKENS {
        for b in TOKENS {
            for c in TOKENS {
                let md = format!("{a}{b}{c}");
                let html = render(md.as_str());
                snapshot::invariants(&html);
                let options = RenderOptions {
                    ordered_lists: true,
                };
                snapshot::invariants(&render_with(md.as_str(), &options));
            }
        }
    }
}
