//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their own window or DOM
//! events into `InputEvent`s before handing them to widgets.

mod types;

pub use types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
