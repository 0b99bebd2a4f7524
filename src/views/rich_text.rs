//! Rich-text AST to HTML.

use std::fmt::Write;

use vitrine_cms::rich_text::{Element, ElementKind, Node, Text};
use vitrine_cms::RichText;

use super::{escape, safe_href};

pub fn render_rich_text(doc: &RichText) -> String {
    let mut out = String::from(r#"<div class="rich-text">"#);
    render_nodes(&doc.children, &mut out);
    out.push_str("</div>");
    out
}

fn render_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => render_text(text, out),
            Node::Element(element) => render_element(element, out),
        }
    }
}

fn render_text(text: &Text, out: &mut String) {
    let mut html = escape(&text.text).replace('\n', "<br>");
    if text.code {
        html = format!("<code>{html}</code>");
    }
    if text.underline {
        html = format!("<u>{html}</u>");
    }
    if text.italic {
        html = format!("<em>{html}</em>");
    }
    if text.bold {
        // bold runs are followed by a space
        html = format!(r#"<b class="rt-bold">{html}</b> "#);
    }
    out.push_str(&html);
}

fn wrap(out: &mut String, open: &str, close: &str, children: &[Node]) {
    out.push_str(open);
    render_nodes(children, out);
    out.push_str(close);
}

fn render_element(element: &Element, out: &mut String) {
    let children = &element.children;
    match element.kind {
        ElementKind::Paragraph => wrap(out, r#"<p class="rt-p">"#, "</p>", children),
        ElementKind::HeadingOne => wrap(out, r#"<h1 class="rt-h1">"#, "</h1>", children),
        ElementKind::HeadingTwo => wrap(out, r#"<h2 class="rt-h2">"#, "</h2>", children),
        ElementKind::HeadingThree => wrap(out, r#"<h3 class="rt-h3">"#, "</h3>", children),
        ElementKind::HeadingFour => wrap(out, r#"<h4 class="rt-h4">"#, "</h4>", children),
        ElementKind::HeadingFive => wrap(out, "<h5>", "</h5>", children),
        ElementKind::HeadingSix => wrap(out, "<h6>", "</h6>", children),
        ElementKind::BlockQuote => wrap(out, "<blockquote>", "</blockquote>", children),
        ElementKind::BulletedList => wrap(out, r#"<ul class="rt-ul">"#, "</ul>", children),
        ElementKind::NumberedList => wrap(out, r#"<ol class="rt-ol">"#, "</ol>", children),
        ElementKind::ListItem => wrap(out, r#"<li class="rt-li">"#, "</li>", children),
        ElementKind::CodeBlock => wrap(out, r#"<pre class="rt-code"><code>"#, "</code></pre>", children),
        ElementKind::Table => wrap(out, r#"<table class="rt-table">"#, "</table>", children),
        ElementKind::TableHead => wrap(out, "<thead>", "</thead>", children),
        ElementKind::TableBody => wrap(out, "<tbody>", "</tbody>", children),
        ElementKind::TableRow => wrap(out, "<tr>", "</tr>", children),
        ElementKind::TableHeaderCell => wrap(out, "<th>", "</th>", children),
        ElementKind::TableCell => wrap(out, "<td>", "</td>", children),
        ElementKind::Link => {
            let target = if element.open_in_new_tab.unwrap_or(false) {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            let open = format!(
                r#"<a href="{}" class="rt-link"{target}>"#,
                escape(safe_href(element.href.as_deref()))
            );
            wrap(out, &open, "</a>", children);
        }
        ElementKind::Image => render_image(element, out),
        ElementKind::ListItemChild | ElementKind::Unknown => render_nodes(children, out),
    }
}

fn render_image(element: &Element, out: &mut String) {
    let Some(src) = element.src.as_deref().filter(|src| !src.is_empty()) else {
        return;
    };

    let mut attrs = format!(
        r#"src="{}" alt="{}""#,
        escape(src),
        escape(element.alt_text.as_deref().unwrap_or_default())
    );
    if let Some(width) = element.width {
        let _ = write!(attrs, r#" width="{width}""#);
    }
    if let Some(height) = element.height {
        let _ = write!(attrs, r#" height="{height}""#);
    }

    let _ = write!(
        out,
        r#"<div class="rt-image"><img {attrs} loading="lazy"></div>"#
    );
}
