use crate::input::{KeyCode, MouseButton};
use crate::math::Vec2;

/// Typed events drained from the backend once per frame.
///
/// The dispatch loop matches on this exhaustively, so adding a new kind of
/// event is a compile-time-checked change for every consumer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    /// The window was asked to close. Terminates the process.
    Quit,
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    MouseButtonDown { button: MouseButton, position: Vec2 },
    MouseButtonUp { button: MouseButton, position: Vec2 },
    MouseMove { position: Vec2 },
}
