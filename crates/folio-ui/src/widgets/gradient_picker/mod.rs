//! Custom gradient picker: a bar with one draggable control point per color
//! stop and an insert point for adding stops.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`position`] | pointer x ⇄ bar percentage |
//! | [`markers`] | control point markers derived from the gradient |
//! | [`control_points`] | drag state machine |
//! | [`insert_point`] | hover / add-stop state |
//!
//! [`GradientPicker`] wires them together and owns the current gradient.

pub mod control_points;
pub mod insert_point;
pub mod markers;
pub mod position;

pub use control_points::{ControlPoints, DragEnd, DragOutcome};
pub use insert_point::InsertPoint;
pub use markers::MarkerPoint;

use folio_engine::coords::Rect;
use folio_engine::paint::{Gradient, GradientError, Rgba};

use crate::config::GradientPickerConfig;
use crate::event::{EventResult, UiEvent};
use crate::listeners::PointerListeners;

use markers::{marker_points, visible_markers};
use position::marker_center_x;

/// Gradient bar editor.
///
/// Every change to the gradient (each drag move, a revert, a recolor, an
/// added or removed stop) is reported once through `on_change`.
///
/// # Example
/// ```rust,ignore
/// let mut picker = GradientPicker::new(Gradient::default())
///     .config(GradientPickerConfig::default().min_significant_move(3.0))
///     .on_change(|g| save(g));
/// picker.set_bounds(Some(bar_rect));
/// ```
pub struct GradientPicker {
    gradient: Gradient,
    config: GradientPickerConfig,
    bounds: Option<Rect>,
    control_points: ControlPoints,
    insert_point: InsertPoint,
    /// Stop whose color popover is open.
    open_popover: Option<usize>,
    on_change: Option<Box<dyn FnMut(&Gradient)>>,
}

impl GradientPicker {
    pub fn new(gradient: Gradient) -> Self {
        let config = GradientPickerConfig::default();
        Self {
            gradient,
            control_points: ControlPoints::new(config.clone()),
            config,
            bounds: None,
            insert_point: InsertPoint::new(),
            open_popover: None,
            on_change: None,
        }
    }

    pub fn config(mut self, config: GradientPickerConfig) -> Self {
        self.control_points = ControlPoints::new(config.clone());
        self.config = config;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&Gradient) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Bounding box of the bar, `None` until it is laid out.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Replaces the gradient from outside (e.g. a preset was picked).
    /// Ignored while a drag is running, since the drag owns its snapshot.
    pub fn set_gradient(&mut self, gradient: Gradient) {
        if self.control_points.is_dragging() {
            log::debug!("external gradient ignored during drag");
            return;
        }
        self.gradient = gradient;
    }

    #[inline]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    #[inline]
    pub fn control_points(&self) -> &ControlPoints {
        &self.control_points
    }

    #[inline]
    pub fn insert_point(&self) -> &InsertPoint {
        &self.insert_point
    }

    #[inline]
    pub fn open_popover(&self) -> Option<usize> {
        self.open_popover
    }

    /// Markers that currently get a handle.
    pub fn markers(&self) -> Vec<MarkerPoint> {
        let points = marker_points(&self.gradient);
        visible_markers(&points, self.insert_point.ignored_marker_position())
            .copied()
            .collect()
    }

    fn emit(&mut self, gradient: Gradient) {
        self.gradient = gradient;
        if let Some(f) = &mut self.on_change {
            f(&self.gradient);
        }
    }

    /// Nearest visible marker whose handle covers `x`. On ties the later
    /// stop wins, as its handle is drawn on top.
    fn marker_at(&self, x: f32) -> Option<usize> {
        let half = self.config.marker_width / 2.0;
        self.markers()
            .into_iter()
            .rev()
            .filter_map(|m| {
                let center = marker_center_x(m.position, self.bounds, &self.config)?;
                let distance = (center - x).abs();
                (distance <= half).then_some((m.index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Routes a pointer event. While a drag runs, moves and the release are
    /// handled wherever the pointer is.
    pub fn on_event(&mut self, event: &UiEvent, listeners: &mut PointerListeners) -> EventResult {
        match event {
            UiEvent::PointerDown { pos } => {
                if self.control_points.is_dragging() {
                    return EventResult::Ignored;
                }
                let inside = self.bounds.is_some_and(|b| b.contains(*pos));
                if !inside {
                    return EventResult::Ignored;
                }
                if let Some(index) = self.marker_at(pos.x) {
                    return match self.control_points.pointer_down(&self.gradient, index, listeners) {
                        Ok(_) => EventResult::Consumed,
                        Err(err) => {
                            log::warn!("control point press rejected: {}", err);
                            EventResult::Ignored
                        }
                    };
                }
                if self.insert_point.pending_position().is_some() {
                    log::debug!("press ignored, insert point is pinned");
                    return EventResult::Ignored;
                }
                if self.insert_point.begin().is_some() {
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            UiEvent::PointerMove { pos } => {
                if self.control_points.is_dragging() {
                    if let Some(moved) = self.control_points.pointer_move(pos.x, self.bounds) {
                        self.emit(moved);
                    }
                    return EventResult::Consumed;
                }
                let inside = self.bounds.is_some_and(|b| b.contains(*pos));
                if inside {
                    let points = marker_points(&self.gradient);
                    let markers = visible_markers(&points, self.insert_point.ignored_marker_position());
                    self.insert_point.hover(pos.x, self.bounds, markers, &self.config);
                } else {
                    self.insert_point.leave();
                }
                EventResult::Ignored
            }
            UiEvent::PointerUp { pos } => {
                let Some(end) = self.control_points.pointer_up(pos.x, self.bounds, listeners) else {
                    return EventResult::Ignored;
                };
                if let Some(reverted) = end.gradient {
                    self.emit(reverted);
                }
                if end.outcome == DragOutcome::Clicked {
                    self.open_popover = Some(end.index);
                    self.insert_point.set_enabled(false);
                }
                EventResult::Consumed
            }
            UiEvent::PointerLeave => {
                self.insert_point.leave();
                EventResult::Ignored
            }
        }
    }

    // ── Popover actions ───────────────────────────────────────────────────

    /// Color chosen in a control point's popover.
    pub fn set_stop_color(&mut self, index: usize, color: Rgba) -> Result<(), GradientError> {
        let next = self.gradient.with_color_at_index_changed(index, color)?;
        self.emit(next);
        Ok(())
    }

    /// "Remove control point" in a control point's popover.
    pub fn remove_stop(&mut self, index: usize) -> Result<(), GradientError> {
        let next = self.gradient.with_control_point_removed(index)?;
        self.emit(next);
        self.open_popover = None;
        self.insert_point.set_enabled(true);
        Ok(())
    }

    /// A control point's popover closed.
    pub fn close_popover(&mut self) {
        self.open_popover = None;
        self.insert_point.set_enabled(true);
    }

    /// Color chosen in the insert point's popover. The first call adds the
    /// stop; later calls recolor the stop at the pinned position.
    ///
    /// Returns `Ok(false)` when no insert point is pinned.
    pub fn set_inserted_color(&mut self, color: Rgba) -> Result<bool, GradientError> {
        let Some(position) = self.insert_point.pending_position() else {
            return Ok(false);
        };
        let next = if self.insert_point.is_added() {
            self.gradient.with_color_at_position_changed(position, color)?
        } else {
            self.gradient.with_color_stop_added(position, color)
        };
        self.insert_point.mark_added();
        self.emit(next);
        Ok(true)
    }

    /// The insert point's popover closed.
    pub fn finish_insert(&mut self) {
        self.insert_point.finish();
    }

    /// Releases document listeners of a live drag; call before dropping the
    /// picker mid-gesture.
    pub fn detach(&mut self, listeners: &mut PointerListeners) {
        self.control_points.detach(listeners);
    }
}
