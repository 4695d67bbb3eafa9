//! Tunables for the gradient picker.

use serde::{Deserialize, Serialize};

/// Geometry and threshold settings for [`crate::widgets::gradient_picker::GradientPicker`].
///
/// Widths and offsets are client pixels; distances and moves are percentage
/// points on the gradient bar. Missing fields fall back to the defaults when
/// deserialized.
///
/// # Example
/// ```rust,ignore
/// let config = GradientPickerConfig::default()
///     .min_significant_move(3.0)
///     .min_distance_between_points(8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientPickerConfig {
    /// Width of a control point marker.
    pub marker_width: f32,
    /// Width of the "add stop" insert point.
    pub insert_point_width: f32,
    /// Left padding of the bar before position 0.
    pub min_left_offset: f32,
    /// Displacement after which a press is a drag rather than a click.
    pub min_significant_move: f32,
    /// A drag released closer than this to another stop is reverted.
    pub min_distance_between_points: f32,
    /// The insert point hides when closer than this to a marker.
    pub min_distance_inserter_marker: f32,
}

impl Default for GradientPickerConfig {
    fn default() -> Self {
        Self {
            marker_width: 18.0,
            insert_point_width: 23.0,
            min_left_offset: 5.0,
            min_significant_move: 5.0,
            min_distance_between_points: 5.0,
            min_distance_inserter_marker: 10.0,
        }
    }
}

impl GradientPickerConfig {
    pub fn marker_width(mut self, v: f32) -> Self { self.marker_width = v; self }
    pub fn insert_point_width(mut self, v: f32) -> Self { self.insert_point_width = v; self }
    pub fn min_left_offset(mut self, v: f32) -> Self { self.min_left_offset = v; self }
    pub fn min_significant_move(mut self, v: f32) -> Self { self.min_significant_move = v; self }
    pub fn min_distance_between_points(mut self, v: f32) -> Self {
        self.min_distance_between_points = v;
        self
    }
    pub fn min_distance_inserter_marker(mut self, v: f32) -> Self {
        self.min_distance_inserter_marker = v;
        self
    }
}
