//! Block tree model and navigation menu flattening.
//!
//! Free of the engine and UI crates so server-side rendering code can depend
//! on it alone.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`block`] | `BlockNode`, `BlockAttributes`, `parse_blocks_json` |
//! | [`menu`] | `MenuItem`, `IdSequence`, `flatten_menu` |
//! | [`error`] | `BlockError` |
//!
//! # Quick start
//!
//! ```rust
//! use folio_blocks::{flatten_menu, BlockNode};
//!
//! let home = BlockNode::item("Home")
//!     .destination("/")
//!     .child(BlockNode::item("About").destination("/about"));
//!
//! let items = flatten_menu(&[home]);
//! assert_eq!(items[0].title, "About");
//! assert_eq!(items[0].parent_id, Some(items[1].id));
//! ```

pub mod block;
pub mod error;
pub mod menu;

pub use block::{parse_blocks_json, BlockAttributes, BlockNode};
pub use error::BlockError;
pub use menu::{flatten_menu, flatten_menu_from, nav_menu_items, IdSequence, MenuItem};
