//! Folio UI: gradient control-point editing on top of `folio-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use folio_ui::prelude::*;
//!
//! let mut listeners = PointerListeners::new();
//! let mut picker = GradientPicker::new(Gradient::default())
//!     .on_change(|g| println!("gradient now has {} stops", g.len()));
//! picker.set_bounds(Some(Rect::new(0.0, 0.0, 228.0, 24.0)));
//!
//! // Host loop: translate input and route it.
//! if let Some(ev) = UiEvent::from_input(&input_event) {
//!     picker.on_event(&ev, &mut listeners);
//! }
//! ```

pub mod config;
pub mod event;
pub mod listeners;
pub mod widgets;

/// Everything needed to host a gradient picker.
pub mod prelude {
    pub use crate::config::GradientPickerConfig;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::listeners::{ListenerId, ListenerKind, PointerListeners};
    pub use crate::widgets::gradient_picker::{
        ControlPoints, DragEnd, DragOutcome, GradientPicker, InsertPoint, MarkerPoint,
    };

    pub use folio_engine::coords::{Rect, Vec2};
    pub use folio_engine::paint::{ColorStop, ColorValue, Gradient, GradientError, Rgba};
}
