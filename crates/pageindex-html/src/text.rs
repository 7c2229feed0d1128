//! Visible text of a parsed document

use scraper::{Html, Node};

/// Subtrees that never render as text, or whose raw-text content is markup
const HIDDEN_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "script", "style", "template", "xmp",
];

/// Elements whose boundaries separate words when rendered
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "head", "header", "hr", "html", "legend", "li", "main", "nav", "ol",
    "option", "p", "pre", "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead",
    "title", "tr", "ul",
];

enum Step<N> {
    Visit(N),
    Close,
}

/// Concatenated human-visible text, whitespace collapsed
pub(crate) fn visible_text(document: &Html) -> String {
    let mut raw = String::new();
    let mut stack = vec![Step::Visit(document.tree.root())];

    // Iterative walk, nesting depth is attacker controlled
    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::Close => {
                raw.push(' ');
                continue;
            }
        };

        match node.value() {
            Node::Text(text) => raw.push_str(&text.text),
            Node::Element(element) => {
                let name = element.name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    raw.push(' ');
                    continue;
                }
                if BLOCK_ELEMENTS.contains(&name) {
                    raw.push(' ');
                    stack.push(Step::Close);
                }
                stack.extend(node.children().rev().map(Step::Visit));
            }
            Node::Document | Node::Fragment => {
                stack.extend(node.children().rev().map(Step::Visit));
            }
            _ => {}
        }
    }

    collapse_whitespace(&raw)
}

fn collapse_whitespace(input: &str) -> String {
    let mut buf = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space && !buf.is_empty() {
                buf.push(' ');
            }
            last_space = true;
        } else {
            buf.push(ch);
            last_space = false;
        }
    }
    buf.truncate(buf.trim_end().len());
    buf
}
