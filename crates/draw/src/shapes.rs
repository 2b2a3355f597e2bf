use corelib::gfx::Color;
use corelib::math::{Rect, Vec2};

use crate::Canvas;

/// A chained rectangle draw. Defaults to a filled white rectangle with
/// square corners; the draw call is submitted when the builder drops at the
/// end of the statement.
pub struct Rect2D<'c, 'a> {
    canvas: &'c mut Canvas<'a>,
    rect: Rect,
    color: Color,
    stroke_width: f32,
    corner_radius: f32,
}

impl<'c, 'a> Rect2D<'c, 'a> {
    pub(crate) fn new(canvas: &'c mut Canvas<'a>, position: Vec2, size: Vec2) -> Self {
        Self {
            canvas,
            rect: Rect::new(position, size),
            color: Color::WHITE,
            stroke_width: 0.0,
            corner_radius: 0.0,
        }
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn corner_radius(&mut self, radius: f32) -> &mut Self {
        self.corner_radius = radius;
        self
    }

    /// Draw only the outline with the given thickness
    pub fn stroke(&mut self, width: f32) -> &mut Self {
        self.stroke_width = width;
        self
    }

    /// Draw filled (the default)
    pub fn fill(&mut self) -> &mut Self {
        self.stroke_width = 0.0;
        self
    }
}

impl Drop for Rect2D<'_, '_> {
    fn drop(&mut self) {
        self.canvas
            .submit_rect(self.rect, self.color, self.stroke_width, self.corner_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::backend::{DrawCmd, HeadlessBackend};
    use corelib::math::vec2;
    use corelib::{App, WindowConfig};

    fn test_app() -> App {
        App::new(
            Box::new(HeadlessBackend::new()),
            WindowConfig::default().frame_rate(0),
        )
        .unwrap()
    }

    #[test]
    fn test_rect_submits_on_drop() {
        let mut app = test_app();
        {
            let mut canvas = Canvas::new(&mut app);
            canvas
                .rect(vec2(1.0, 2.0), vec2(3.0, 4.0))
                .corner_radius(5.0)
                .stroke(2.0)
                .color(Color::RED);
        }

        let backend = app.backend_mut().downcast_mut::<HeadlessBackend>().unwrap();
        match backend.commands().last().unwrap() {
            DrawCmd::Rect {
                rect,
                color,
                stroke_width,
                corner_radius,
                ..
            } => {
                assert_eq!(*rect, Rect::new(vec2(1.0, 2.0), vec2(3.0, 4.0)));
                assert_eq!(*color, Color::RED);
                assert_eq!(*stroke_width, 2.0);
                assert_eq!(*corner_radius, 5.0);
            }
            other => panic!("expected a rect command, got {other:?}"),
        }
    }

    #[test]
    fn test_rect_defaults_to_filled_white() {
        let mut app = test_app();
        {
            let mut canvas = Canvas::new(&mut app);
            canvas.rect(vec2(0.0, 0.0), vec2(10.0, 10.0));
        }

        let backend = app.backend_mut().downcast_mut::<HeadlessBackend>().unwrap();
        assert!(matches!(
            backend.commands()[0],
            DrawCmd::Rect {
                color,
                stroke_width,
                corner_radius,
                ..
            } if color == Color::WHITE && stroke_width == 0.0 && corner_radius == 0.0
        ));
    }
}
