//! Drag interaction for gradient control points.
//!
//! ```text
//!            pointer_down(i)                pointer_up
//!   Idle ───────────────────▶ Dragging ─────────────────▶ Idle
//!                               │  ▲
//!                   pointer_move└──┘ emits original.with_position_at_index_changed(i, p)
//! ```
//!
//! Every move is computed against the snapshot taken at press time, never
//! against the previous move, so rounding never accumulates. The two
//! document-level listeners live exactly as long as the `Dragging` state.

use folio_engine::coords::Rect;
use folio_engine::paint::{Gradient, GradientError};

use crate::config::GradientPickerConfig;
use crate::listeners::{ListenerId, ListenerKind, PointerListeners};

use super::position::relative_position;

/// State owned by one press-drag-release gesture.
#[derive(Debug)]
struct DragSession {
    index: usize,
    original: Gradient,
    initial_position: f32,
    significant_move: bool,
    listeners: [ListenerId; 2],
}

impl DragSession {
    fn release(self, listeners: &mut PointerListeners) -> (usize, Gradient, bool) {
        for id in self.listeners {
            listeners.unsubscribe(id);
        }
        (self.index, self.original, self.significant_move)
    }
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// How a gesture ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DragOutcome {
    /// The point moved far enough to count as a drag; the last move stands.
    Moved,
    /// The point never moved significantly; the caller treats it as a click.
    Clicked,
    /// The release landed too close to another stop; the snapshot was restored.
    Reverted,
}

/// Result of [`ControlPoints::pointer_up`].
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub index: usize,
    pub outcome: DragOutcome,
    /// Gradient to emit, if the release itself changes it (only on revert).
    pub gradient: Option<Gradient>,
}

/// Drag controller for the control points of one gradient bar.
#[derive(Debug, Default)]
pub struct ControlPoints {
    config: GradientPickerConfig,
    state: DragState,
}

impl ControlPoints {
    pub fn new(config: GradientPickerConfig) -> Self {
        Self { config, state: DragState::Idle }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn dragged_index(&self) -> Option<usize> {
        match &self.state {
            DragState::Dragging(session) => Some(session.index),
            DragState::Idle => None,
        }
    }

    /// Whether the live drag has passed the significant-move threshold.
    pub fn significant_move_happened(&self) -> bool {
        match &self.state {
            DragState::Dragging(session) => session.significant_move,
            DragState::Idle => false,
        }
    }

    /// Starts dragging stop `index` of `gradient`.
    ///
    /// Returns `Ok(false)` when a drag is already running (the press is
    /// ignored). Stops without a percentage position cannot be dragged.
    pub fn pointer_down(
        &mut self,
        gradient: &Gradient,
        index: usize,
        listeners: &mut PointerListeners,
    ) -> Result<bool, GradientError> {
        if let DragState::Dragging(session) = &self.state {
            log::debug!("press on stop {} ignored, stop {} is being dragged", index, session.index);
            return Ok(false);
        }
        let stop = gradient
            .stops
            .get(index)
            .ok_or(GradientError::IndexOutOfRange { index, len: gradient.len() })?;
        let initial_position = stop.percent().ok_or(GradientError::NotDraggable { index })?;

        let listeners = [
            listeners.subscribe(ListenerKind::PointerMove),
            listeners.subscribe(ListenerKind::PointerUp),
        ];
        log::debug!("drag start on stop {} at {}%", index, initial_position);
        self.state = DragState::Dragging(DragSession {
            index,
            original: gradient.clone(),
            initial_position,
            significant_move: false,
            listeners,
        });
        Ok(true)
    }

    /// Handles a pointer move. Returns the gradient to emit, or `None` when
    /// idle or when the bar cannot be measured.
    pub fn pointer_move(&mut self, pointer_x: f32, container: Option<Rect>) -> Option<Gradient> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        let position =
            relative_position(pointer_x, container, self.config.marker_width, &self.config)?;

        if !session.significant_move
            && (session.initial_position - position).abs() >= self.config.min_significant_move
        {
            session.significant_move = true;
        }

        match session.original.with_position_at_index_changed(session.index, position) {
            Ok(moved) => Some(moved),
            Err(err) => {
                log::warn!("drag move dropped: {}", err);
                None
            }
        }
    }

    /// Ends the drag and releases its listeners.
    ///
    /// Returns `None` when no drag was running.
    pub fn pointer_up(
        &mut self,
        pointer_x: f32,
        container: Option<Rect>,
        listeners: &mut PointerListeners,
    ) -> Option<DragEnd> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        let (index, original, significant_move) = session.release(listeners);

        let released_at =
            relative_position(pointer_x, container, self.config.marker_width, &self.config);
        let conflicts = released_at.is_some_and(|p| {
            original.stops.iter().enumerate().any(|(i, stop)| {
                i != index
                    && stop
                        .percent()
                        .is_some_and(|other| (other - p).abs() < self.config.min_distance_between_points)
            })
        });

        let end = if conflicts {
            log::debug!("drag of stop {} reverted, released too close to another stop", index);
            DragEnd { index, outcome: DragOutcome::Reverted, gradient: Some(original) }
        } else if significant_move {
            log::debug!("drag of stop {} committed", index);
            DragEnd { index, outcome: DragOutcome::Moved, gradient: None }
        } else {
            DragEnd { index, outcome: DragOutcome::Clicked, gradient: None }
        };
        Some(end)
    }

    /// Drops a live drag without emitting anything, releasing its listeners.
    ///
    /// For owners being torn down mid-gesture. Returns whether a drag was live.
    pub fn detach(&mut self, listeners: &mut PointerListeners) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                log::debug!("drag of stop {} detached", session.index);
                session.release(listeners);
                true
            }
            DragState::Idle => false,
        }
    }
}
