use super::*;

#[test]
fn render_formats_code_blocks() {
    let out = render("```python\nprint(1)\n```");
    assert!(out.contains("<pre><code class=\"language-python\">print(1)"));
}

#[test]
fn render_escapes_raw_html() {
    let out = render("<script>alert(1)</script>");
    assert!(!out.contains("<script>"));
    assert!(out.contains("&lt;script&gt;"));
}

#[test]
fn render_supports_tables() {
    let out = render("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(out.contains("<table>"));
}
