use folio_engine::coords::Vec2;
use folio_engine::input::{InputEvent, MouseButtonState};

/// Pointer events routed to widgets.
///
/// Only the primary button produces `PointerDown` / `PointerUp`.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed at `pos`.
    PointerDown { pos: Vec2 },
    /// Pointer moved to `pos`, whether or not a button is held.
    PointerMove { pos: Vec2 },
    /// Primary button released at `pos`.
    ///
    /// Fires even when `pos` is outside the widget that received the press.
    PointerUp { pos: Vec2 },
    /// Pointer left the document surface.
    PointerLeave,
}

impl UiEvent {
    /// Translates a host input event. Returns `None` for events widgets do not see.
    pub fn from_input(ev: &InputEvent) -> Option<Self> {
        match ev {
            InputEvent::PointerMoved(m) => Some(UiEvent::PointerMove { pos: Vec2::new(m.x, m.y) }),
            InputEvent::PointerButton(b) if b.is_primary() => {
                let pos = Vec2::new(b.x, b.y);
                Some(match b.state {
                    MouseButtonState::Pressed => UiEvent::PointerDown { pos },
                    MouseButtonState::Released => UiEvent::PointerUp { pos },
                })
            }
            InputEvent::PointerLeft => Some(UiEvent::PointerLeave),
            _ => None,
        }
    }
}

/// Result returned by widget event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing it.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::input::{Modifiers, MouseButton, PointerButtonEvent};

    #[test]
    fn primary_press_and_release() {
        assert_eq!(
            UiEvent::from_input(&InputEvent::primary_pressed(3.0, 4.0)),
            Some(UiEvent::PointerDown { pos: Vec2::new(3.0, 4.0) })
        );
        assert_eq!(
            UiEvent::from_input(&InputEvent::primary_released(5.0, 6.0)),
            Some(UiEvent::PointerUp { pos: Vec2::new(5.0, 6.0) })
        );
    }

    #[test]
    fn secondary_button_is_dropped() {
        let ev = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            state: MouseButtonState::Pressed,
            x: 0.0,
            y: 0.0,
            modifiers: Modifiers::default(),
        });
        assert_eq!(UiEvent::from_input(&ev), None);
        assert_eq!(UiEvent::from_input(&InputEvent::Focused(false)), None);
    }
}
