/// Keyboard key identifier.
///
/// Only the keys the scene reacts to get their own variant. Everything else
/// maps to `Key::Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Pointer move event in logical pixels (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is a key-repeat.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),

    /// The user asked the window to close (title-bar button, Alt+F4, ...).
    CloseRequested,
}
