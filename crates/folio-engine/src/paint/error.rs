use thiserror::Error;

/// Errors raised by gradient edit operations.
///
/// All of these are caller mistakes: the operations never fail for valid
/// input, and never fall back to editing some other stop.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    /// A stop index did not address an existing stop.
    #[error("color stop index {index} is out of range for a gradient with {len} stops")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of stops in the gradient.
        len: usize,
    },
    /// No stop sits exactly at the requested percentage.
    #[error("no color stop is positioned at {position}%")]
    PositionNotFound {
        /// The percentage that was looked up.
        position: f32,
    },
    /// An alpha channel outside `[0, 1]` (or not a number) came from a color picker.
    #[error("alpha {0} is outside [0, 1]")]
    InvalidAlpha(f32),
    /// The stop has no percentage position, so it has no control point.
    #[error("color stop {index} has no percentage position and cannot be dragged")]
    NotDraggable {
        /// Index of the stop.
        index: usize,
    },
}
