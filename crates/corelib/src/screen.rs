use crate::app::App;
use crate::input::{KeyCode, MouseButton};

/// A screen inside a windowed application, e.g. a menu, a pause screen or
/// the main game screen.
///
/// Implement it and override the hooks you care about, then hand it to
/// [`App::run`]. Every hook gets the [`App`] so it can draw, read input
/// state or stop the loop.
pub trait Screen {
    /// Runs every frame, meant for drawing and update logic
    fn update(&mut self, app: &mut App) {
        app.clear(app.clear_color());
    }

    /// Called for every key press event
    fn key_down(&mut self, _app: &mut App, _key: KeyCode) {}

    /// Called for every key release event
    fn key_up(&mut self, _app: &mut App, _key: KeyCode) {}

    /// Called for every mouse button press event
    fn mouse_button_down(&mut self, _app: &mut App, _button: MouseButton) {}

    /// Called for every mouse button release event
    fn mouse_button_up(&mut self, _app: &mut App, _button: MouseButton) {}
}
