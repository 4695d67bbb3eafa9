//! Mapping between client x coordinates and bar percentages.

use folio_engine::coords::Rect;

use crate::config::GradientPickerConfig;

fn available_width(container: Rect, config: &GradientPickerConfig) -> Option<f32> {
    if !container.is_measurable() {
        return None;
    }
    let available = container.width() - config.min_left_offset - config.insert_point_width;
    (available > 0.0).then_some(available)
}

/// Percentage (integer-valued, clamped to `[0, 100]`) under `pointer_x`.
///
/// `positioned_width` is the width of the element being placed (a marker or
/// the insert point); the mapping targets its center. Returns `None` while the
/// container is not laid out, in which case the caller ignores the event.
pub fn relative_position(
    pointer_x: f32,
    container: Option<Rect>,
    positioned_width: f32,
    config: &GradientPickerConfig,
) -> Option<f32> {
    let container = container?;
    let available = available_width(container, config)?;
    if !pointer_x.is_finite() {
        return None;
    }
    let absolute = pointer_x - container.left() - config.min_left_offset - positioned_width / 2.0;
    Some(((absolute * 100.0) / available).clamp(0.0, 100.0).round())
}

/// Client x of the center of a marker sitting at `position` percent.
pub fn marker_center_x(
    position: f32,
    container: Option<Rect>,
    config: &GradientPickerConfig,
) -> Option<f32> {
    let container = container?;
    let available = available_width(container, config)?;
    Some(
        container.left()
            + config.min_left_offset
            + config.marker_width / 2.0
            + position.clamp(0.0, 100.0) * available / 100.0,
    )
}
