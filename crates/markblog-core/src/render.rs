//! Markdown rendering - a small, pure converter for the subset the editor
//! documents: headings, emphasis, lists, blockquotes, fenced code, inline
//! code, and links.
//!
//! Every piece of source text is HTML-entity escaped before any markup of
//! our own is emitted, and link destinations carrying script-bearing schemes
//! are refused, so the output is safe to insert into a display surface
//! without a separate sanitization pass. Malformed input never fails:
//! unrecognized or unclosed spans fall through as literal escaped text.

/// Convert markdown to an HTML fragment.
///
/// Deterministic and total: identical input produces byte-identical output,
/// and no input panics. Empty input yields an empty string; the caller is
/// responsible for substituting a "no content yet" placeholder.
pub fn render(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    let mut paragraph: Vec<&str> = Vec::new();
    let mut quote: Vec<&str> = Vec::new();
    let mut list: Option<ListKind> = None;
    let mut in_code = false;

    for line in markdown.lines() {
        if in_code {
            if line.trim_start().starts_with("```") {
                out.push_str("</code></pre>\n");
                in_code = false;
            } else {
                push_escaped(&mut out, line);
                out.push('\n');
            }
            continue;
        }

        let trimmed = line.trim_start();

        if trimmed.starts_with("```") {
            flush_paragraph(&mut out, &mut paragraph);
            flush_quote(&mut out, &mut quote);
            close_list(&mut out, &mut list);
            out.push_str("<pre><code>");
            in_code = true;
            continue;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
            flush_quote(&mut out, &mut quote);
            close_list(&mut out, &mut list);
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            flush_paragraph(&mut out, &mut paragraph);
            flush_quote(&mut out, &mut quote);
            close_list(&mut out, &mut list);
            out.push_str(&format!("<h{level}>{}</h{level}>\n", render_inline(text)));
            continue;
        }

        if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            flush_paragraph(&mut out, &mut paragraph);
            flush_quote(&mut out, &mut quote);
            open_list(&mut out, &mut list, ListKind::Unordered);
            out.push_str(&format!("<li>{}</li>\n", render_inline(item)));
            continue;
        }

        if let Some(item) = ordered_item(trimmed) {
            flush_paragraph(&mut out, &mut paragraph);
            flush_quote(&mut out, &mut quote);
            open_list(&mut out, &mut list, ListKind::Ordered);
            out.push_str(&format!("<li>{}</li>\n", render_inline(item)));
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('>') {
            flush_paragraph(&mut out, &mut paragraph);
            close_list(&mut out, &mut list);
            quote.push(rest.strip_prefix(' ').unwrap_or(rest));
            continue;
        }

        flush_quote(&mut out, &mut quote);
        close_list(&mut out, &mut list);
        paragraph.push(trimmed);
    }

    flush_paragraph(&mut out, &mut paragraph);
    flush_quote(&mut out, &mut quote);
    close_list(&mut out, &mut list);
    if in_code {
        // Unterminated fence: close it rather than leak an open tag.
        out.push_str("</code></pre>\n");
    }
    out
}

#[derive(Clone, Copy, PartialEq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

fn open_list(out: &mut String, list: &mut Option<ListKind>, kind: ListKind) {
    if *list != Some(kind) {
        close_list(out, list);
        out.push_str(&format!("<{}>\n", kind.tag()));
        *list = Some(kind);
    }
}

fn close_list(out: &mut String, list: &mut Option<ListKind>) {
    if let Some(kind) = list.take() {
        out.push_str(&format!("</{}>\n", kind.tag()));
    }
}

fn flush_paragraph(out: &mut String, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        let joined = paragraph.join(" ");
        out.push_str(&format!("<p>{}</p>\n", render_inline(&joined)));
        paragraph.clear();
    }
}

fn flush_quote(out: &mut String, quote: &mut Vec<&str>) {
    if !quote.is_empty() {
        let joined = quote.join(" ");
        out.push_str(&format!(
            "<blockquote><p>{}</p></blockquote>\n",
            render_inline(&joined)
        ));
        quote.clear();
    }
}

/// `#`..`######` followed by a space.
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&level) {
        line[level..].strip_prefix(' ').map(|rest| (level, rest))
    } else {
        None
    }
}

/// Leading digits followed by `. `.
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Render inline spans: `` `code` ``, `**bold**`, `*italic*`, and
/// `[text](url)` links. Everything else is escaped literal text.
fn render_inline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => {
                if let Some(close) = find_char(&chars, i + 1, '`') {
                    out.push_str("<code>");
                    for &c in &chars[i + 1..close] {
                        push_escaped_char(&mut out, c);
                    }
                    out.push_str("</code>");
                    i = close + 1;
                } else {
                    push_escaped_char(&mut out, '`');
                    i += 1;
                }
            }
            '*' if i + 1 < chars.len() && chars[i + 1] == '*' => {
                match find_double_star(&chars, i + 2) {
                    Some(close) if close > i + 2 => {
                        let inner: String = chars[i + 2..close].iter().collect();
                        out.push_str("<strong>");
                        out.push_str(&render_inline(&inner));
                        out.push_str("</strong>");
                        i = close + 2;
                    }
                    _ => {
                        push_escaped_char(&mut out, '*');
                        push_escaped_char(&mut out, '*');
                        i += 2;
                    }
                }
            }
            '*' => match find_char(&chars, i + 1, '*') {
                Some(close) if close > i + 1 => {
                    let inner: String = chars[i + 1..close].iter().collect();
                    out.push_str("<em>");
                    out.push_str(&render_inline(&inner));
                    out.push_str("</em>");
                    i = close + 1;
                }
                _ => {
                    push_escaped_char(&mut out, '*');
                    i += 1;
                }
            },
            '[' => {
                if let Some((text_end, url_end)) = link_bounds(&chars, i) {
                    let label: String = chars[i + 1..text_end].iter().collect();
                    let url: String = chars[text_end + 2..url_end].iter().collect();
                    if safe_url(&url) {
                        out.push_str("<a href=\"");
                        push_escaped(&mut out, url.trim());
                        out.push_str("\">");
                        out.push_str(&render_inline(&label));
                        out.push_str("</a>");
                    } else {
                        // Script-bearing scheme: drop the link, keep the text.
                        out.push_str(&render_inline(&label));
                    }
                    i = url_end + 1;
                } else {
                    push_escaped_char(&mut out, '[');
                    i += 1;
                }
            }
            c => {
                push_escaped_char(&mut out, c);
                i += 1;
            }
        }
    }
    out
}

/// Bounds of a `[text](url)` span starting at `start` (which must be `[`):
/// returns the indices of the closing `]` and closing `)`.
fn link_bounds(chars: &[char], start: usize) -> Option<(usize, usize)> {
    let text_end = find_char(chars, start + 1, ']')?;
    if chars.get(text_end + 1) != Some(&'(') {
        return None;
    }
    let url_end = find_char(chars, text_end + 2, ')')?;
    Some((text_end, url_end))
}

fn find_char(chars: &[char], from: usize, needle: char) -> Option<usize> {
    (from..chars.len()).find(|&j| chars[j] == needle)
}

fn find_double_star(chars: &[char], from: usize) -> Option<usize> {
    if chars.len() < 2 {
        return None;
    }
    (from..chars.len() - 1).find(|&j| chars[j] == '*' && chars[j + 1] == '*')
}

/// A destination is unsafe when its scheme can carry executable content,
/// even with whitespace or control characters smuggled into the scheme.
fn safe_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_lowercase();
    !(compact.starts_with("javascript:")
        || compact.starts_with("vbscript:")
        || compact.starts_with("data:"))
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        push_escaped_char(out, c);
    }
}

fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings() {
        assert_eq!(render("# Title"), "<h1>Title</h1>\n");
        assert_eq!(render("### Sub"), "<h3>Sub</h3>\n");
        assert_eq!(render("####### seven"), "<p>####### seven</p>\n");
    }

    #[test]
    fn renders_emphasis_and_inline_code() {
        assert_eq!(
            render("**bold** and *italic* and `code`"),
            "<p><strong>bold</strong> and <em>italic</em> and <code>code</code></p>\n"
        );
    }

    #[test]
    fn renders_lists() {
        assert_eq!(
            render("- one\n- two"),
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
        );
        assert_eq!(
            render("1. first\n2. second"),
            "<ol>\n<li>first</li>\n<li>second</li>\n</ol>\n"
        );
    }

    #[test]
    fn switching_list_kind_closes_the_previous_list() {
        assert_eq!(
            render("- a\n1. b"),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n"
        );
    }

    #[test]
    fn renders_blockquotes_joining_adjacent_lines() {
        assert_eq!(
            render("> first\n> second"),
            "<blockquote><p>first second</p></blockquote>\n"
        );
    }

    #[test]
    fn renders_fenced_code_without_inline_formatting() {
        assert_eq!(
            render("```rust\nlet x = **1**;\n```"),
            "<pre><code>let x = **1**;\n</code></pre>\n"
        );
    }

    #[test]
    fn closes_an_unterminated_fence() {
        assert_eq!(render("```\nabc"), "<pre><code>abc\n</code></pre>\n");
    }

    #[test]
    fn joins_paragraph_lines_and_separates_blocks() {
        assert_eq!(
            render("one\ntwo\n\nthree"),
            "<p>one two</p>\n<p>three</p>\n"
        );
    }

    #[test]
    fn renders_links_and_escapes_labels() {
        assert_eq!(
            render("[site](https://example.com)"),
            "<p><a href=\"https://example.com\">site</a></p>\n"
        );
    }

    #[test]
    fn escapes_embedded_html() {
        assert_eq!(
            render("<script>alert('x')</script>"),
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</p>\n"
        );
        assert_eq!(
            render("# <img onerror=x>"),
            "<h1>&lt;img onerror=x&gt;</h1>\n"
        );
    }

    #[test]
    fn drops_script_bearing_link_schemes() {
        assert_eq!(render("[click](javascript:alert(1)"), "<p>click</p>\n");
        assert_eq!(render("[b](JAVAscript:x)"), "<p>b</p>\n");
        assert_eq!(render("[c](java script:x)"), "<p>c</p>\n");
        assert_eq!(render("[d](data:text/html,x)"), "<p>d</p>\n");
    }

    #[test]
    fn malformed_spans_fall_through_as_literal_text() {
        assert_eq!(render("a ** b"), "<p>a ** b</p>\n");
        assert_eq!(render("un`closed"), "<p>un`closed</p>\n");
        assert_eq!(render("[no](closing"), "<p>[no](closing</p>\n");
        assert_eq!(render("just ] a bracket"), "<p>just ] a bracket</p>\n");
    }

    #[test]
    fn output_is_deterministic() {
        let input = "# T\n\n- a\n- b\n\n> q\n\n```\ncode\n```\n";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn empty_input_renders_to_nothing() {
        assert_eq!(render(""), "");
    }
}
