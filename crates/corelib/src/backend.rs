mod headless;

pub use headless::{DrawCmd, HeadlessBackend};

use downcast_rs::{Downcast, impl_downcast};
use smallvec::SmallVec;

use crate::events::Event;
use crate::gfx::{Color, FontId, SurfaceId, TextureId};
use crate::math::{Rect, UVec2, Vec2};

const MAX_EVENTS_PER_FRAME_HINT: usize = 8;

pub type EventQueue = SmallVec<Event, MAX_EVENTS_PER_FRAME_HINT>;

/// The capability set expected from the underlying windowing/rendering
/// toolkit. Everything that touches the OS or pixels goes through here.
///
/// A `stroke_width` of `0.0` means filled, any positive value is the stroke
/// thickness. Surfaces, textures and fonts are referenced by opaque ids
/// minted by the implementation.
pub trait BackendImpl: Downcast {
    fn set_title(&mut self, title: &str);

    fn create_surface(&mut self, size: UVec2) -> Result<SurfaceId, String>;

    /// Upload raw RGBA8 pixels, `pixels.len()` must be `w * h * 4`
    fn create_texture(&mut self, size: UVec2, pixels: &[u8]) -> Result<TextureId, String>;

    /// Copy a sub-rectangle of a texture into a new texture
    fn clip_texture(&mut self, source: TextureId, region: Rect) -> Result<TextureId, String>;

    fn load_font(&mut self, data: &[u8], size: f32) -> Result<FontId, String>;

    fn text_size(&self, font: FontId, text: &str) -> Vec2;

    fn clear(&mut self, target: SurfaceId, color: Color);

    fn draw_rect(
        &mut self,
        target: SurfaceId,
        rect: Rect,
        color: Color,
        stroke_width: f32,
        corner_radius: f32,
    );

    fn draw_texture(&mut self, target: SurfaceId, texture: TextureId, position: Vec2);

    fn draw_text(&mut self, target: SurfaceId, font: FontId, text: &str, position: Vec2, color: Color);

    /// Stretch-copy the whole source surface onto the whole target surface
    fn blit_scaled(&mut self, source: SurfaceId, target: SurfaceId);

    /// Drain every event queued since the last call
    fn poll_events(&mut self) -> EventQueue;

    fn present(&mut self, surface: SurfaceId) -> Result<(), String>;
}

impl_downcast!(BackendImpl);
