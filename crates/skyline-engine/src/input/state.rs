use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, PointerMoveEvent};

/// Current input state for the window.
///
/// Holds "is down" information, the pointer position and the sticky
/// close-request flag. Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels, top-left origin.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set once the platform asks the window to close. Never cleared.
    pub close_requested: bool,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoid stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::CloseRequested => {
                self.close_requested = true;
            }
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn pointer_tracks_moves_and_leave() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 12.0, y: 30.0 }));
        assert_eq!(state.pointer_pos, Some((12.0, 30.0)));

        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn key_press_recorded_once_until_release() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        frame.clear();
        // A second press without release (e.g. missed release) is not a new transition.
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        assert!(!frame.key_pressed(Key::Escape));
        assert!(state.keys_down.contains(&Key::Escape));

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released));
        assert!(frame.keys_released.contains(&Key::Escape));
        assert!(!state.keys_down.contains(&Key::Escape));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Unknown(42), KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn close_request_is_sticky() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::CloseRequested);
        frame.clear();
        state.apply_event(&mut frame, InputEvent::Focused(true));
        assert!(state.close_requested);
    }
}
