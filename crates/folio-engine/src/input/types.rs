/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer move event in client pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are carried on the event so handlers never need to consult a
/// separately tracked "current pointer position".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

impl PointerButtonEvent {
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.button == MouseButton::Left
    }
}

/// Platform-agnostic input events emitted by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
    /// Pointer left the document surface.
    PointerLeft,
    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Convenience constructor for a primary-button press at `(x, y)`.
    pub fn primary_pressed(x: f32, y: f32) -> Self {
        Self::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    /// Convenience constructor for a primary-button release at `(x, y)`.
    pub fn primary_released(x: f32, y: f32) -> Self {
        Self::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::PointerMoved(PointerMoveEvent { x, y })
    }
}
