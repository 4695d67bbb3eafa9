//! Coordinate and geometry types shared by the editor widgets.
//!
//! Canonical CPU space:
//! - Client pixels as reported by pointer events
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
