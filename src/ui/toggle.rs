use corelib::gfx::Font;
use corelib::math::Rect;
use draw::Canvas;

use crate::ui::{ButtonAction, ButtonStyle};

/// A two-state button: every activation runs the callback and flips
/// between the on and off text/colors.
///
/// Unlike [`crate::ui::Button`] there is no one-frame clicked pulse, the
/// toggled state itself is the feedback.
pub struct ToggleButton {
    action: Option<ButtonAction>,
    on_text: String,
    off_text: String,
    rect: Rect,
    font: Font,
    on_style: ButtonStyle,
    off_style: ButtonStyle,
    highlight: bool,
    toggled: bool,
}

impl ToggleButton {
    pub fn new(
        on_text: impl Into<String>,
        off_text: impl Into<String>,
        rect: Rect,
        font: Font,
    ) -> Self {
        Self {
            action: None,
            on_text: on_text.into(),
            off_text: off_text.into(),
            rect,
            font,
            on_style: ButtonStyle::default(),
            off_style: ButtonStyle::default(),
            highlight: false,
            toggled: false,
        }
    }

    /// Callback invoked synchronously on every activation
    pub fn with_action(mut self, action: impl FnMut() + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Use the same style for both states
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.on_style = style;
        self.off_style = style;
        self
    }

    /// Use distinct styles for the on and off states
    pub fn with_styles(mut self, on: ButtonStyle, off: ButtonStyle) -> Self {
        self.on_style = on;
        self.off_style = off;
        self
    }

    /// Set the initial toggled state, defaults to off
    pub fn with_toggled(mut self, toggled: bool) -> Self {
        self.toggled = toggled;
        self
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn toggled(&self) -> bool {
        self.toggled
    }

    #[inline]
    pub fn highlight(&self) -> bool {
        self.highlight
    }

    pub fn set_highlight(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    /// Run the action (if any), then flip the toggled state
    pub fn activate(&mut self) {
        if let Some(action) = &mut self.action {
            action();
        }
        self.toggled = !self.toggled;
    }

    /// Draw with the style and text of the current state.
    /// `override_highlight` works like on [`crate::ui::Button`]
    pub fn draw(&mut self, canvas: &mut Canvas, override_highlight: Option<bool>) {
        let (style, text) = if self.toggled {
            (&self.on_style, &self.on_text)
        } else {
            (&self.off_style, &self.off_text)
        };

        let color = if override_highlight.unwrap_or(self.highlight) {
            style.highlight
        } else {
            style.fill
        };

        {
            let mut rect = canvas.rect(self.rect.origin, self.rect.size);
            rect.corner_radius(style.corner_radius).color(color);
            if style.line_width > 0.0 {
                rect.stroke(style.line_width);
            }
        }

        if style.border_size > 0.0 {
            canvas
                .rect(self.rect.origin, self.rect.size)
                .corner_radius(style.corner_radius)
                .stroke(style.border_size)
                .color(style.border);
        }

        let text_size = canvas.text_size(&self.font, text);
        canvas.text(
            &self.font,
            text,
            self.rect.center() - text_size * 0.5,
            style.text,
        );
    }
}
