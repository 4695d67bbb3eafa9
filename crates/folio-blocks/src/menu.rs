//! Flattening of nested navigation blocks into parent-referencing menu items.
//!
//! Tree walkers that render menus expect a flat list where nesting is
//! expressed through `parent_id`. Ids come from an [`IdSequence`] owned by a
//! single flatten call; a node takes its id only after all of its children
//! have taken theirs, so the output reads
//! `[descendants of first root..., first root, descendants of second root..., ...]`
//! and ids increase along it.

use serde::{Deserialize, Serialize};

use crate::block::BlockNode;

/// Url used for items without a destination.
pub const PLACEHOLDER_URL: &str = "#";

// ── MenuItem ──────────────────────────────────────────────────────────────

/// One entry of a flattened menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u32,
    pub title: String,
    pub url: String,
    /// Id of the enclosing item; `None` for top-level items.
    pub parent_id: Option<u32>,
}

impl MenuItem {
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

// ── IdSequence ────────────────────────────────────────────────────────────

/// Monotonic id source for one flatten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn starting_at(base: u32) -> Self {
        Self { next: base }
    }

    /// The id the next call to [`next_id`](Self::next_id) returns.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

// ── Flattening ────────────────────────────────────────────────────────────

/// Flattens sibling `roots` with ids starting at 1.
pub fn flatten_menu(roots: &[BlockNode]) -> Vec<MenuItem> {
    flatten_menu_from(roots, IdSequence::default())
}

/// Flattens sibling `roots`, drawing ids from `ids`.
pub fn flatten_menu_from(roots: &[BlockNode], mut ids: IdSequence) -> Vec<MenuItem> {
    let mut items = Vec::with_capacity(roots.iter().map(BlockNode::count).sum());
    for root in roots {
        flatten_node(root, &mut ids, &mut items);
    }
    log::trace!("flattened {} menu items from {} top-level blocks", items.len(), roots.len());
    items
}

/// Items of a navigation menu block: its inner blocks are the top level.
pub fn nav_menu_items(menu: &BlockNode) -> Vec<MenuItem> {
    flatten_menu(&menu.children)
}

/// Appends `node`'s subtree to `out` and returns the slot of `node`'s own item.
fn flatten_node(node: &BlockNode, ids: &mut IdSequence, out: &mut Vec<MenuItem>) -> usize {
    let child_slots: Vec<usize> = node
        .children
        .iter()
        .map(|child| flatten_node(child, ids, out))
        .collect();

    let id = ids.next_id();
    for slot in child_slots {
        out[slot].parent_id = Some(id);
    }

    let attributes = &node.attributes;
    out.push(MenuItem {
        id,
        title: attributes.label.clone().unwrap_or_default(),
        url: attributes
            .destination
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
        parent_id: None,
    });
    out.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    fn by_title<'a>(items: &'a [MenuItem], title: &str) -> &'a MenuItem {
        items.iter().find(|i| i.title == title).unwrap()
    }

    #[test]
    fn home_with_about() {
        let home = BlockNode::item("Home")
            .destination("/")
            .child(BlockNode::item("About").destination("/about"));
        let items = flatten_menu(&[home]);

        assert_eq!(titles(&items), vec!["About", "Home"]);
        assert_eq!(items[0].url, "/about");
        assert_eq!(items[1].url, "/");
        assert_eq!(items[0].parent_id, Some(items[1].id));
        assert!(items[1].is_root());
    }

    #[test]
    fn children_before_parent_and_ids_follow_output() {
        let root = BlockNode::item("R")
            .child(BlockNode::item("A").child(BlockNode::item("A1")))
            .child(BlockNode::item("B"));
        let items = flatten_menu(&[root]);

        assert_eq!(titles(&items), vec!["A1", "A", "B", "R"]);
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let (a1, a, b, r) = (by_title(&items, "A1"), by_title(&items, "A"), by_title(&items, "B"), by_title(&items, "R"));
        assert_eq!(a1.parent_id, Some(a.id));
        assert_eq!(a.parent_id, Some(r.id));
        assert_eq!(b.parent_id, Some(r.id));
        assert_eq!(r.parent_id, None);
        assert!(items.iter().all(|i| i.id <= r.id));
    }

    #[test]
    fn missing_destination_gets_placeholder() {
        let items = flatten_menu(&[BlockNode::item("Nowhere")]);
        assert_eq!(items[0].url, PLACEHOLDER_URL);
        assert_eq!(items[0].url, "#");
    }

    #[test]
    fn missing_label_is_empty_title() {
        let items = flatten_menu(&[BlockNode::default()]);
        assert_eq!(items[0].title, "");
    }

    #[test]
    fn sibling_roots_share_one_sequence() {
        let roots = [
            BlockNode::item("First").child(BlockNode::item("Inner")),
            BlockNode::item("Second"),
        ];
        let items = flatten_menu(&roots);
        assert_eq!(titles(&items), vec!["Inner", "First", "Second"]);
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(items.iter().filter(|i| i.is_root()).count(), 2);
    }

    #[test]
    fn base_id_is_configurable_and_calls_are_independent() {
        let roots = [BlockNode::item("Only")];
        assert_eq!(flatten_menu_from(&roots, IdSequence::starting_at(100))[0].id, 100);
        // no state leaks between calls
        assert_eq!(flatten_menu(&roots)[0].id, 1);
        assert_eq!(flatten_menu(&roots)[0].id, 1);
    }

    #[test]
    fn nav_menu_skips_the_menu_block_itself() {
        let menu = BlockNode {
            name: Some("core/navigation-menu".to_string()),
            ..BlockNode::default()
        }
        .child(BlockNode::item("Home").destination("/"))
        .child(BlockNode::item("Blog").destination("/blog"));
        let items = nav_menu_items(&menu);
        assert_eq!(titles(&items), vec!["Home", "Blog"]);
        assert!(items.iter().all(MenuItem::is_root));
    }

    #[test]
    fn serializes_parent_id_in_camel_case() {
        let item = MenuItem { id: 2, title: "A".into(), url: "#".into(), parent_id: Some(4) };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r##"{"id":2,"title":"A","url":"#","parentId":4}"##);
    }

    #[test]
    fn sequence_peek_and_next() {
        let mut ids = IdSequence::default();
        assert_eq!(ids.peek(), 1);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.peek(), 3);
    }
}
