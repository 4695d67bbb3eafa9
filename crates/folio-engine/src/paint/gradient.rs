use serde::{Deserialize, Serialize};

use super::{ColorValue, GradientError, Rgba};

/// Gradient shape. Carried through every edit untouched.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// Unit of a stop position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "em")]
    Em,
}

/// A stop position (`50%`, `12px`, ...).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self { value, unit: LengthUnit::Percent }
    }

    #[inline]
    pub fn as_percent(self) -> Option<f32> {
        match self.unit {
            LengthUnit::Percent => Some(self.value),
            _ => None,
        }
    }
}

/// A single gradient stop.
///
/// `position` is `None` for stops written without a length; only stops with a
/// percentage position get a control point on the gradient bar.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: ColorValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Length>,
}

impl ColorStop {
    #[inline]
    pub const fn new(color: ColorValue, position: Option<Length>) -> Self {
        Self { color, position }
    }

    #[inline]
    pub const fn at_percent(color: ColorValue, percent: f32) -> Self {
        Self { color, position: Some(Length::percent(percent)) }
    }

    /// Percentage position, if this stop has one.
    #[inline]
    pub fn percent(&self) -> Option<f32> {
        self.position.and_then(Length::as_percent)
    }
}

/// Parsed gradient: an ordered list of color stops.
///
/// Stop order is the source order; the model never sorts it. Every edit
/// returns a new `Gradient` and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(default)]
    pub kind: GradientKind,
    /// Orientation in degrees, when the source gave one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
    pub stops: Vec<ColorStop>,
}

impl Default for Gradient {
    /// `linear-gradient(135deg, rgba(6,147,227,1) 0%, rgb(155,81,224) 100%)`
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: Some(135.0),
            stops: vec![
                ColorStop::at_percent(ColorValue::Rgba { r: 6, g: 147, b: 227, a: 1.0 }, 0.0),
                ColorStop::at_percent(ColorValue::rgb(155, 81, 224), 100.0),
            ],
        }
    }
}

impl Gradient {
    pub fn new(kind: GradientKind, stops: Vec<ColorStop>) -> Self {
        Self { kind, angle: None, stops }
    }

    pub fn linear(stops: Vec<ColorStop>) -> Self {
        Self::new(GradientKind::Linear, stops)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Percentage position of stop `index`, if the stop exists and has one.
    pub fn percent_at(&self, index: usize) -> Option<f32> {
        self.stops.get(index).and_then(ColorStop::percent)
    }

    /// Index of the first stop positioned at exactly `position` percent.
    pub fn index_at_percent(&self, position: f32) -> Option<usize> {
        self.stops.iter().position(|s| s.percent() == Some(position))
    }

    fn check_index(&self, index: usize) -> Result<(), GradientError> {
        if index < self.stops.len() {
            Ok(())
        } else {
            Err(GradientError::IndexOutOfRange { index, len: self.stops.len() })
        }
    }

    // ── Edits ─────────────────────────────────────────────────────────────

    /// Moves stop `index` to `position` percent.
    ///
    /// The new position is always a percentage, whatever unit the stop had.
    pub fn with_position_at_index_changed(
        &self,
        index: usize,
        position: f32,
    ) -> Result<Gradient, GradientError> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.stops[index].position = Some(Length::percent(position));
        Ok(next)
    }

    /// Recolors stop `index`, keeping its position.
    pub fn with_color_at_index_changed(
        &self,
        index: usize,
        color: Rgba,
    ) -> Result<Gradient, GradientError> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.stops[index].color = color.into();
        Ok(next)
    }

    /// Appends a stop at `position` percent. The stop goes to the end of the
    /// list, not to its sorted place.
    pub fn with_color_stop_added(&self, position: f32, color: Rgba) -> Gradient {
        let mut next = self.clone();
        next.stops.push(ColorStop::at_percent(color.into(), position));
        next
    }

    /// Drops stop `index`; the others keep their relative order.
    pub fn with_control_point_removed(&self, index: usize) -> Result<Gradient, GradientError> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.stops.remove(index);
        Ok(next)
    }

    /// Recolors the first stop sitting at exactly `position` percent.
    pub fn with_color_at_position_changed(
        &self,
        position: f32,
        color: Rgba,
    ) -> Result<Gradient, GradientError> {
        let index = self
            .index_at_percent(position)
            .ok_or(GradientError::PositionNotFound { position })?;
        self.with_color_at_index_changed(index, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stops() -> Gradient {
        Gradient::linear(vec![
            ColorStop::at_percent(ColorValue::rgb(255, 0, 0), 0.0),
            ColorStop::at_percent(ColorValue::rgb(0, 255, 0), 40.0),
            ColorStop::at_percent(ColorValue::rgb(0, 0, 255), 100.0),
        ])
    }

    // ── position ──────────────────────────────────────────────────────────

    #[test]
    fn position_change_touches_only_target_stop() {
        let g = three_stops();
        let moved = g.with_position_at_index_changed(1, 55.0).unwrap();
        assert_eq!(moved.len(), g.len());
        assert_eq!(moved.percent_at(1), Some(55.0));
        assert_eq!(moved.stops[1].color, g.stops[1].color);
        assert_eq!(moved.stops[0], g.stops[0]);
        assert_eq!(moved.stops[2], g.stops[2]);
        // input untouched
        assert_eq!(g.percent_at(1), Some(40.0));
    }

    #[test]
    fn position_change_turns_unpositioned_stop_into_percent() {
        let g = Gradient::linear(vec![ColorStop::new(ColorValue::rgb(1, 1, 1), None)]);
        let moved = g.with_position_at_index_changed(0, 30.0).unwrap();
        assert_eq!(moved.percent_at(0), Some(30.0));
    }

    #[test]
    fn position_change_out_of_range() {
        assert_eq!(
            three_stops().with_position_at_index_changed(3, 10.0),
            Err(GradientError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    // ── color ─────────────────────────────────────────────────────────────

    #[test]
    fn color_change_keeps_position() {
        let g = three_stops();
        let translucent = Rgba::new(9, 9, 9, 0.5).unwrap();
        let recolored = g.with_color_at_index_changed(2, translucent).unwrap();
        assert_eq!(recolored.stops[2].color, ColorValue::Rgba { r: 9, g: 9, b: 9, a: 0.5 });
        assert_eq!(recolored.percent_at(2), Some(100.0));

        let opaque = recolored.with_color_at_index_changed(2, Rgba::opaque(9, 9, 9)).unwrap();
        assert_eq!(opaque.stops[2].color, ColorValue::rgb(9, 9, 9));
    }

    #[test]
    fn color_at_position_uses_first_exact_match() {
        let mut g = three_stops();
        g.stops.push(ColorStop::at_percent(ColorValue::rgb(7, 7, 7), 40.0));
        let recolored = g.with_color_at_position_changed(40.0, Rgba::opaque(1, 2, 3)).unwrap();
        assert_eq!(recolored.stops[1].color, ColorValue::rgb(1, 2, 3));
        assert_eq!(recolored.stops[3].color, ColorValue::rgb(7, 7, 7));
    }

    #[test]
    fn color_at_missing_position_is_an_error() {
        assert_eq!(
            three_stops().with_color_at_position_changed(41.0, Rgba::opaque(0, 0, 0)),
            Err(GradientError::PositionNotFound { position: 41.0 })
        );
    }

    #[test]
    fn color_at_position_ignores_px_stops() {
        let g = Gradient::linear(vec![ColorStop::new(
            ColorValue::rgb(0, 0, 0),
            Some(Length { value: 40.0, unit: LengthUnit::Px }),
        )]);
        assert!(g.with_color_at_position_changed(40.0, Rgba::opaque(1, 1, 1)).is_err());
    }

    // ── add / remove ──────────────────────────────────────────────────────

    #[test]
    fn added_stop_is_appended_not_sorted() {
        let added = three_stops().with_color_stop_added(20.0, Rgba::opaque(5, 5, 5));
        assert_eq!(added.len(), 4);
        assert_eq!(added.percent_at(3), Some(20.0));
        assert_eq!(added.stops[3].color, ColorValue::rgb(5, 5, 5));
    }

    #[test]
    fn removal_preserves_relative_order() {
        let g = three_stops();
        let removed = g.with_control_point_removed(1).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(removed.stops, vec![g.stops[0], g.stops[2]]);
        assert!(g.with_control_point_removed(5).is_err());
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn default_gradient_matches_editor_default() {
        let g = Gradient::default();
        assert_eq!(g.angle, Some(135.0));
        assert_eq!(g.percent_at(0), Some(0.0));
        assert_eq!(g.percent_at(1), Some(100.0));
    }

    #[test]
    fn kind_and_angle_survive_edits() {
        let mut g = Gradient::new(GradientKind::Radial, three_stops().stops);
        g.angle = Some(90.0);
        let edited = g.with_control_point_removed(0).unwrap();
        assert_eq!(edited.kind, GradientKind::Radial);
        assert_eq!(edited.angle, Some(90.0));
    }

    #[test]
    fn deserializes_percent_lengths() {
        let json = r#"{"stops":[{"color":{"type":"rgb","r":0,"g":0,"b":0},"position":{"value":25.0,"unit":"%"}},
                                {"color":{"type":"rgba","r":1,"g":1,"b":1,"a":0.5}}]}"#;
        let g: Gradient = serde_json::from_str(json).unwrap();
        assert_eq!(g.kind, GradientKind::Linear);
        assert_eq!(g.percent_at(0), Some(25.0));
        assert_eq!(g.percent_at(1), None);
    }
}
