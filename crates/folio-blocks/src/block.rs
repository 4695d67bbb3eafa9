use serde::{Deserialize, Serialize};

use crate::error::BlockError;

// ── Attributes ────────────────────────────────────────────────────────────

/// Attributes of a navigation menu item block.
///
/// Other attributes present in the source are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

// ── BlockNode ─────────────────────────────────────────────────────────────

/// A parsed block with its nested inner blocks.
///
/// Deserializes from both the short field names used here and the block
/// parser's own (`blockName`, `attrs`, `innerBlocks`):
///
/// ```json
/// { "blockName": "core/navigation-menu-item",
///   "attrs": { "label": "Home", "destination": "/" },
///   "innerBlocks": [] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    #[serde(default, alias = "blockName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "attrs")]
    pub attributes: BlockAttributes,
    #[serde(default, alias = "innerBlocks")]
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    /// A menu item block with `label` and no destination.
    pub fn item(label: impl Into<String>) -> Self {
        Self {
            name: Some("core/navigation-menu-item".to_string()),
            attributes: BlockAttributes { label: Some(label.into()), destination: None },
            children: Vec::new(),
        }
    }

    pub fn destination(mut self, url: impl Into<String>) -> Self {
        self.attributes.destination = Some(url.into());
        self
    }

    pub fn child(mut self, node: BlockNode) -> Self {
        self.children.push(node);
        self
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(BlockNode::count).sum::<usize>()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<BlockNode>),
    One(BlockNode),
}

/// Reads block JSON: either a single block or an array of sibling blocks.
pub fn parse_blocks_json(src: &str) -> Result<Vec<BlockNode>, BlockError> {
    Ok(match serde_json::from_str::<OneOrMany>(src)? {
        OneOrMany::Many(blocks) => blocks,
        OneOrMany::One(block) => vec![block],
    })
}
