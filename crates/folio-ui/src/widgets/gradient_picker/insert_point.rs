//! The "add color stop" insert point that follows the pointer over the bar.

use folio_engine::coords::Rect;

use crate::config::GradientPickerConfig;

use super::markers::MarkerPoint;
use super::position::relative_position;

/// Hover and insertion state of the insert point.
///
/// Lifecycle: hovering sets a candidate position; [`begin`](Self::begin)
/// pins it while the color popover is open; the first color chosen adds the
/// stop, later colors recolor it; [`finish`](Self::finish) unpins.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertPoint {
    enabled: bool,
    hover: Option<f32>,
    pending: Option<f32>,
    added: bool,
}

impl Default for InsertPoint {
    fn default() -> Self {
        Self { enabled: true, hover: None, pending: None, added: false }
    }
}

impl InsertPoint {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables hover tracking (disabled while a control point
    /// popover is open). Disabling clears the hover candidate.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.hover = None;
        }
    }

    /// Candidate position under the pointer, if the insert point is shown.
    #[inline]
    pub fn hover_position(&self) -> Option<f32> {
        self.hover
    }

    /// Position pinned by [`begin`](Self::begin).
    #[inline]
    pub fn pending_position(&self) -> Option<f32> {
        self.pending
    }

    /// Integer position of the pinned insert point; the marker there is hidden.
    pub fn ignored_marker_position(&self) -> Option<i32> {
        self.pending.map(|p| p.trunc() as i32)
    }

    /// Whether the pinned stop has already been added to the gradient.
    #[inline]
    pub fn is_added(&self) -> bool {
        self.added
    }

    /// Tracks the pointer. Hidden when disabled, pinned, unmeasurable or too
    /// close to an existing marker.
    pub fn hover<'a>(
        &mut self,
        pointer_x: f32,
        container: Option<Rect>,
        markers: impl IntoIterator<Item = &'a MarkerPoint>,
        config: &GradientPickerConfig,
    ) {
        if !self.enabled || self.pending.is_some() {
            return;
        }
        self.hover = relative_position(pointer_x, container, config.insert_point_width, config)
            .filter(|p| {
                markers
                    .into_iter()
                    .all(|m| (m.position - p).abs() >= config.min_distance_inserter_marker)
            });
    }

    /// Pointer left the bar.
    pub fn leave(&mut self) {
        if self.pending.is_none() {
            self.hover = None;
        }
    }

    /// Pins the hovered position. Returns it, or `None` when nothing is
    /// hovered or a position is already pinned; only [`finish`](Self::finish)
    /// releases a pin.
    pub fn begin(&mut self) -> Option<f32> {
        if self.pending.is_some() {
            return None;
        }
        let position = self.hover?;
        self.pending = Some(position);
        self.added = false;
        Some(position)
    }

    pub(crate) fn mark_added(&mut self) {
        self.added = true;
    }

    /// Unpins the insert point (its popover closed).
    pub fn finish(&mut self) {
        self.pending = None;
        self.hover = None;
        self.added = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::paint::ColorValue;

    fn bar() -> Option<Rect> {
        Some(Rect::new(20.0, 0.0, 128.0, 24.0))
    }

    // insert point is 23px wide: pointer x = 36.5 + p lands on p percent.
    fn x_for(p: f32) -> f32 {
        36.5 + p
    }

    const NO_MARKERS: [MarkerPoint; 0] = [];

    fn marker(position: f32) -> MarkerPoint {
        MarkerPoint { index: 0, color: ColorValue::rgb(0, 0, 0), position, position_value: position as i32 }
    }

    #[test]
    fn hover_tracks_free_space() {
        let config = GradientPickerConfig::default();
        let markers = [marker(0.0), marker(100.0)];
        let mut ip = InsertPoint::new();
        ip.hover(x_for(40.0), bar(), &markers, &config);
        assert_eq!(ip.hover_position(), Some(40.0));
    }

    #[test]
    fn hover_hides_near_marker() {
        let config = GradientPickerConfig::default();
        let markers = [marker(0.0), marker(50.0)];
        let mut ip = InsertPoint::new();
        ip.hover(x_for(55.0), bar(), &markers, &config);
        assert_eq!(ip.hover_position(), None);
        ip.hover(x_for(60.0), bar(), &markers, &config);
        assert_eq!(ip.hover_position(), Some(60.0));
    }

    #[test]
    fn disabled_insert_point_ignores_hover() {
        let config = GradientPickerConfig::default();
        let mut ip = InsertPoint::new();
        ip.hover(x_for(40.0), bar(), &NO_MARKERS, &config);
        ip.set_enabled(false);
        assert_eq!(ip.hover_position(), None);
        ip.hover(x_for(40.0), bar(), &NO_MARKERS, &config);
        assert_eq!(ip.hover_position(), None);
    }

    #[test]
    fn begin_pins_until_finish() {
        let config = GradientPickerConfig::default();
        let mut ip = InsertPoint::new();
        assert_eq!(ip.begin(), None);

        ip.hover(x_for(40.0), bar(), &NO_MARKERS, &config);
        assert_eq!(ip.begin(), Some(40.0));
        assert_eq!(ip.ignored_marker_position(), Some(40));

        ip.hover(x_for(70.0), bar(), &NO_MARKERS, &config);
        ip.leave();
        assert_eq!(ip.pending_position(), Some(40.0));
        assert_eq!(ip.hover_position(), Some(40.0));

        ip.finish();
        assert_eq!(ip.pending_position(), None);
        assert_eq!(ip.hover_position(), None);
    }

    #[test]
    fn begin_while_pinned_keeps_the_pin() {
        let config = GradientPickerConfig::default();
        let mut ip = InsertPoint::new();
        ip.hover(x_for(40.0), bar(), &NO_MARKERS, &config);
        ip.begin();
        ip.mark_added();

        assert_eq!(ip.begin(), None);
        assert_eq!(ip.pending_position(), Some(40.0));
        assert!(ip.is_added());
    }
}
