use crate::gfx::TextureId;
use crate::math::{UVec2, Vec2, uvec2};

/// A cheap handle to an image uploaded to the backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    id: TextureId,
    size: Vec2,
}

impl Texture {
    #[inline]
    pub const fn new(id: TextureId, size: Vec2) -> Self {
        Self { id, size }
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }
}

/// Decode encoded image bytes (png, jpeg, webp) into raw RGBA8 pixels
pub(crate) fn decode_rgba(bytes: &[u8]) -> Result<(UVec2, Vec<u8>), String> {
    let image = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let rgba = image.to_rgba8();
    let size = uvec2(rgba.width(), rgba.height());
    Ok((size, rgba.into_raw()))
}
