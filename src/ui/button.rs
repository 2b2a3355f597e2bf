use corelib::gfx::{Color, Font};
use corelib::math::Rect;
use draw::Canvas;

pub type ButtonAction = Box<dyn FnMut()>;

/// Colors and line widths for a button's three visual states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub fill: Color,
    pub highlight: Color,
    pub clicked: Color,
    pub text: Color,
    pub border: Color,
    /// Border pass thickness, 0 disables the border
    pub border_size: f32,
    pub corner_radius: f32,
    /// Main rect outline thickness, 0 draws it filled
    pub line_width: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            highlight: Color::rgb_u8(150, 150, 150),
            clicked: Color::rgb_u8(100, 100, 100),
            text: Color::BLACK,
            border: Color::BLACK,
            border_size: 0.0,
            corner_radius: 0.0,
            line_width: 0.0,
        }
    }
}

/// A labeled rectangle that runs a callback when activated.
///
/// The button does no hit-testing on its own, the owning screen decides
/// when it is activated (see `MenuScreen`). After an activation the
/// `clicked` color shows for exactly one drawn frame.
pub struct Button {
    action: Option<ButtonAction>,
    text: String,
    rect: Rect,
    font: Font,
    style: ButtonStyle,
    clicked: bool,
    highlight: bool,
}

impl Button {
    pub fn new(text: impl Into<String>, rect: Rect, font: Font) -> Self {
        Self {
            action: None,
            text: text.into(),
            rect,
            font,
            style: ButtonStyle::default(),
            clicked: false,
            highlight: false,
        }
    }

    /// Callback invoked synchronously on activation
    pub fn with_action(mut self, action: impl FnMut() + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// True between an activation and the next draw
    #[inline]
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    #[inline]
    pub fn highlight(&self) -> bool {
        self.highlight
    }

    pub fn set_highlight(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    /// Run the action (if any) and start the one-frame clicked pulse
    pub fn activate(&mut self) {
        if let Some(action) = &mut self.action {
            action();
        }
        self.clicked = true;
    }

    /// Draw the button. `override_highlight` forces the highlight state for
    /// this frame; `None` falls back to the internal flag.
    ///
    /// Color priority: clicked, then highlight, then fill. The clicked state
    /// clears as soon as it has been drawn once.
    pub fn draw(&mut self, canvas: &mut Canvas, override_highlight: Option<bool>) {
        let color = if self.clicked {
            self.style.clicked
        } else if override_highlight.unwrap_or(self.highlight) {
            self.style.highlight
        } else {
            self.style.fill
        };

        {
            let mut rect = canvas.rect(self.rect.origin, self.rect.size);
            rect.corner_radius(self.style.corner_radius).color(color);
            if self.style.line_width > 0.0 {
                rect.stroke(self.style.line_width);
            }
        }
        self.clicked = false;

        if self.style.border_size > 0.0 {
            canvas
                .rect(self.rect.origin, self.rect.size)
                .corner_radius(self.style.corner_radius)
                .stroke(self.style.border_size)
                .color(self.style.border);
        }

        let text_size = canvas.text_size(&self.font, &self.text);
        canvas.text(
            &self.font,
            &self.text,
            self.rect.center() - text_size * 0.5,
            self.style.text,
        );
    }
}
