//! Control point markers derived from a gradient.

use folio_engine::paint::{ColorValue, Gradient};

/// A draggable control point for one color stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerPoint {
    /// Index of the stop in the gradient.
    pub index: usize,
    pub color: ColorValue,
    /// Exact percentage position.
    pub position: f32,
    /// Position truncated to an integer, used to match the insert point.
    pub position_value: i32,
}

/// One entry per stop, index-aligned with `gradient.stops`.
///
/// Stops without a percentage position get `None`: they have no handle but
/// stay in the gradient untouched.
pub fn marker_points(gradient: &Gradient) -> Vec<Option<MarkerPoint>> {
    gradient
        .stops
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            stop.percent().map(|position| MarkerPoint {
                index,
                color: stop.color,
                position,
                position_value: position.trunc() as i32,
            })
        })
        .collect()
}

/// Markers that get a handle, skipping the one under a pending insert point.
pub fn visible_markers(
    points: &[Option<MarkerPoint>],
    ignore_position: Option<i32>,
) -> impl Iterator<Item = &MarkerPoint> {
    points
        .iter()
        .flatten()
        .filter(move |m| Some(m.position_value) != ignore_position)
}
