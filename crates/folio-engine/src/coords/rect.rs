use super::Vec2;

/// Axis-aligned bounding box in client pixels (top-left origin).
///
/// This is what a layout collaborator reports for a mounted element; widgets
/// that have not been laid out yet simply have no `Rect`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Left edge (`x` of the bounding client rect).
    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// True when the box can be used for horizontal pointer mapping.
    ///
    /// Height is irrelevant for a 1-D bar, so a zero-height box that has a
    /// real width still counts.
    #[inline]
    pub fn is_measurable(self) -> bool {
        self.is_finite() && self.size.x > 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── measurable ────────────────────────────────────────────────────────

    #[test]
    fn measurable_with_width() {
        assert!(r(10.0, 0.0, 200.0, 24.0).is_measurable());
    }

    #[test]
    fn zero_height_bar_is_still_measurable() {
        assert!(r(10.0, 0.0, 200.0, 0.0).is_measurable());
    }

    #[test]
    fn unmounted_box_is_not_measurable() {
        assert!(!Rect::default().is_measurable());
        assert!(!r(f32::NAN, 0.0, 200.0, 24.0).is_measurable());
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }
}
