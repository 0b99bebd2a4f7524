//! Rich-text documents as stored by the CMS.
//!
//! The CMS returns rich text as a JSON tree: `{ "children": [ ... ] }` where
//! every node is either an element (`"type": "paragraph"`, `"link"`, ...) or a
//! text leaf carrying formatting flags. Rendering lives with the views; this
//! module only models the tree.

use serde::{Deserialize, Serialize};

/// Root of a rich-text document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(Text),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Paragraph,
    HeadingOne,
    HeadingTwo,
    HeadingThree,
    HeadingFour,
    HeadingFive,
    HeadingSix,
    BlockQuote,
    BulletedList,
    NumberedList,
    ListItem,
    ListItemChild,
    Link,
    CodeBlock,
    Image,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableHeaderCell,
    TableCell,
    /// Anything this storefront does not render specially; children still render.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_in_new_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl RichText {
    /// A document made of one paragraph per line of `text`.
    pub fn from_plain(text: &str) -> Self {
        let children = text
            .lines()
            .map(|line| {
                Node::Element(Element::new(
                    ElementKind::Paragraph,
                    vec![Node::Text(Text::plain(line))],
                ))
            })
            .collect();
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Text content with block elements separated by newlines.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            collect_text(node, &mut out);
        }
        out.trim_end().to_string()
    }
}

impl Element {
    pub fn new(kind: ElementKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            children,
            href: None,
            open_in_new_tab: None,
            src: None,
            alt_text: None,
            title: None,
            width: None,
            height: None,
        }
    }

    pub fn is_block(&self) -> bool {
        !matches!(self.kind, ElementKind::Link | ElementKind::ListItemChild)
    }
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.text),
        Node::Element(element) => {
            for child in &element.children {
                collect_text(child, out);
            }
            if element.is_block() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
    }
}
