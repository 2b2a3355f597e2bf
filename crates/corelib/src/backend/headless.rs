use rustc_hash::FxHashMap;

use crate::backend::{BackendImpl, EventQueue};
use crate::events::Event;
use crate::gfx::{Color, FontId, SurfaceId, TextureId};
use crate::math::{Rect, UVec2, Vec2};

/// One recorded draw call, in submission order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        target: SurfaceId,
        color: Color,
    },
    Rect {
        target: SurfaceId,
        rect: Rect,
        color: Color,
        stroke_width: f32,
        corner_radius: f32,
    },
    Texture {
        target: SurfaceId,
        texture: TextureId,
        position: Vec2,
    },
    Text {
        target: SurfaceId,
        font: FontId,
        text: String,
        position: Vec2,
        color: Color,
    },
    BlitScaled {
        source: SurfaceId,
        target: SurfaceId,
    },
    Present {
        surface: SurfaceId,
    },
}

/// Backend without a window: draw calls are recorded instead of rasterized
/// and events are whatever the caller queued with [`HeadlessBackend::push_event`].
///
/// Used by the test suite and for running screens on machines without a
/// display.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u64,
    title: String,
    texture_sizes: FxHashMap<TextureId, UVec2>,
    font_sizes: FxHashMap<FontId, f32>,
    queued: Vec<Event>,
    commands: Vec<DrawCmd>,
    frames_presented: u64,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event to be returned by the next `poll_events` call
    pub fn push_event(&mut self, event: Event) {
        self.queued.push(event);
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn texture_size(&self, texture: TextureId) -> Option<UVec2> {
        self.texture_sizes.get(&texture).copied()
    }

    fn next_raw(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl BackendImpl for HeadlessBackend {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn create_surface(&mut self, _size: UVec2) -> Result<SurfaceId, String> {
        Ok(SurfaceId::new(self.next_raw()))
    }

    fn create_texture(&mut self, size: UVec2, pixels: &[u8]) -> Result<TextureId, String> {
        let expected = (size.x * size.y * 4) as usize;
        if pixels.len() != expected {
            return Err(format!(
                "texture of {}x{} needs {expected} bytes of RGBA data, got {}",
                size.x,
                size.y,
                pixels.len()
            ));
        }

        let id = TextureId::new(self.next_raw());
        self.texture_sizes.insert(id, size);
        Ok(id)
    }

    fn clip_texture(&mut self, source: TextureId, region: Rect) -> Result<TextureId, String> {
        if !self.texture_sizes.contains_key(&source) {
            return Err(format!("unknown texture {source:?}"));
        }

        let id = TextureId::new(self.next_raw());
        self.texture_sizes.insert(id, region.size.as_uvec2());
        Ok(id)
    }

    fn load_font(&mut self, _data: &[u8], size: f32) -> Result<FontId, String> {
        let id = FontId::new(self.next_raw());
        self.font_sizes.insert(id, size);
        Ok(id)
    }

    fn text_size(&self, font: FontId, text: &str) -> Vec2 {
        // fixed-advance estimate, half an em per glyph
        let size = self.font_sizes.get(&font).copied().unwrap_or_default();
        Vec2::new(size * 0.5 * text.chars().count() as f32, size)
    }

    fn clear(&mut self, target: SurfaceId, color: Color) {
        self.commands.push(DrawCmd::Clear { target, color });
    }

    fn draw_rect(
        &mut self,
        target: SurfaceId,
        rect: Rect,
        color: Color,
        stroke_width: f32,
        corner_radius: f32,
    ) {
        self.commands.push(DrawCmd::Rect {
            target,
            rect,
            color,
            stroke_width,
            corner_radius,
        });
    }

    fn draw_texture(&mut self, target: SurfaceId, texture: TextureId, position: Vec2) {
        self.commands.push(DrawCmd::Texture {
            target,
            texture,
            position,
        });
    }

    fn draw_text(&mut self, target: SurfaceId, font: FontId, text: &str, position: Vec2, color: Color) {
        self.commands.push(DrawCmd::Text {
            target,
            font,
            text: text.to_string(),
            position,
            color,
        });
    }

    fn blit_scaled(&mut self, source: SurfaceId, target: SurfaceId) {
        self.commands.push(DrawCmd::BlitScaled { source, target });
    }

    fn poll_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.queued).into_iter().collect()
    }

    fn present(&mut self, surface: SurfaceId) -> Result<(), String> {
        self.commands.push(DrawCmd::Present { surface });
        self.frames_presented += 1;
        Ok(())
    }
}
