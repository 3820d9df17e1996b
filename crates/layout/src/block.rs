//! Input content blocks.
use serde::{Deserialize, Serialize};

/// One child of a content block.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Inline {
    Text(String),
    Element(ContentBlock),
}

/// A block-level unit of content, typically a paragraph.
///
/// Deserializes from either a plain string or `{ "children": [...] }`.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct ContentBlock {
    pub children: Vec<Inline>,
}

impl ContentBlock {
    pub fn new(children: Vec<Inline>) -> Self {
        Self { children }
    }

    /// A block holding a single text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            children: vec![Inline::Text(text.into())],
        }
    }

    /// The concatenated text of every descendant, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Inline::Text(text) => out.push_str(text),
                Inline::Element(block) => block.collect_text(out),
            }
        }
    }

    /// Whether the block can be split at word boundaries. Only blocks that
    /// start with a plain text child qualify.
    pub fn is_splittable(&self) -> bool {
        matches!(self.children.first(), None | Some(Inline::Text(_)))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BlockDef {
    Text(String),
    Node(BlockNode),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockNode {
    #[serde(default)]
    children: Vec<Inline>,
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match BlockDef::deserialize(deserializer)? {
            BlockDef::Text(text) => ContentBlock::text(text),
            BlockDef::Node(node) => ContentBlock {
                children: node.children,
            },
        })
    }
}
