use corelib::input::{KeyCode, MouseButton};
use corelib::{App, Screen};
use draw::Canvas;

use crate::ui::Button;

/// A screen made of an ordered list of buttons, e.g. a main menu, a pause
/// menu or an options page.
///
/// Arrow keys move the active index with wraparound in both directions,
/// Return/Space activates the active button, and a left click activates the
/// first button whose rect contains the pointer. The active button is drawn
/// with its highlight color.
pub struct MenuScreen {
    buttons: Vec<Button>,
    button_index: usize,
}

impl MenuScreen {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self {
            buttons,
            button_index: 0,
        }
    }

    #[inline]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    #[inline]
    pub fn buttons_mut(&mut self) -> &mut Vec<Button> {
        &mut self.buttons
    }

    /// Index of the button keyboard navigation is on
    #[inline]
    pub fn active_index(&self) -> usize {
        self.button_index
    }

    /// Move the active index back, wrapping to the last button
    pub fn select_previous(&mut self) {
        if self.buttons.is_empty() {
            return;
        }
        self.button_index = if self.button_index == 0 {
            self.buttons.len() - 1
        } else {
            self.button_index - 1
        };
    }

    /// Move the active index forward, wrapping to the first button
    pub fn select_next(&mut self) {
        if self.buttons.is_empty() {
            return;
        }
        self.button_index = (self.button_index + 1) % self.buttons.len();
    }

    /// Activate the button the active index is on
    pub fn activate_selected(&mut self) {
        if let Some(button) = self.buttons.get_mut(self.button_index) {
            button.activate();
        }
    }

    /// Draw every button, forcing the highlight on the active one
    pub fn draw_buttons(&mut self, canvas: &mut Canvas) {
        for (i, button) in self.buttons.iter_mut().enumerate() {
            let override_highlight = if i == self.button_index {
                Some(true)
            } else {
                None
            };
            button.draw(canvas, override_highlight);
        }
    }
}

impl Screen for MenuScreen {
    fn update(&mut self, app: &mut App) {
        let mut canvas = Canvas::new(app);
        self.draw_buttons(&mut canvas);
    }

    fn key_down(&mut self, _app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Left => self.select_previous(),
            KeyCode::Down | KeyCode::Right => self.select_next(),
            KeyCode::Return | KeyCode::Space => self.activate_selected(),
            _ => {}
        }
    }

    fn mouse_button_down(&mut self, app: &mut App, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        let pos = if app.is_scaled() {
            app.scaled_mouse_pos()
        } else {
            app.mouse_position()
        };

        // first match in list order wins when rects overlap
        for (i, btn) in self.buttons.iter_mut().enumerate() {
            if btn.rect().contains(pos) {
                self.button_index = i;
                btn.activate();
                break;
            }
        }
    }
}
