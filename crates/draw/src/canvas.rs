use corelib::App;
use corelib::backend::BackendImpl;
use corelib::gfx::{Color, Font, SurfaceId, Texture};
use corelib::math::{IntoVec2, Rect, Vec2};

use crate::Rect2D;

/// Immediate-mode drawing over the frame's render surface.
///
/// Borrow one from the [`App`] inside `update`, draw, and let it go out of
/// scope before the frame is presented.
pub struct Canvas<'a> {
    backend: &'a mut dyn BackendImpl,
    target: SurfaceId,
    size: Vec2,
}

impl<'a> Canvas<'a> {
    pub fn new(app: &'a mut App) -> Self {
        let (backend, target, size) = app.draw_context();
        Self {
            backend,
            target,
            size: size.as_vec2(),
        }
    }

    /// The drawable size in logical pixels
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Fill the whole surface with a single color
    pub fn fill(&mut self, color: Color) {
        self.backend.clear(self.target, color);
    }

    /// Start a rectangle, submitted when the returned builder drops
    pub fn rect(&mut self, position: impl IntoVec2, size: impl IntoVec2) -> Rect2D<'_, 'a> {
        Rect2D::new(self, position.into_vec2(), size.into_vec2())
    }

    /// Draw a texture with its top-left corner at `position`
    pub fn image(&mut self, texture: &Texture, position: impl IntoVec2) {
        self.backend
            .draw_texture(self.target, texture.id(), position.into_vec2());
    }

    /// Draw text with its top-left corner at `position`
    pub fn text(&mut self, font: &Font, text: &str, position: impl IntoVec2, color: Color) {
        self.backend
            .draw_text(self.target, font.id(), text, position.into_vec2(), color);
    }

    /// Measure the rendered size of `text`
    pub fn text_size(&self, font: &Font, text: &str) -> Vec2 {
        self.backend.text_size(font.id(), text)
    }

    pub(crate) fn submit_rect(
        &mut self,
        rect: Rect,
        color: Color,
        stroke_width: f32,
        corner_radius: f32,
    ) {
        self.backend
            .draw_rect(self.target, rect, color, stroke_width, corner_radius);
    }
}
