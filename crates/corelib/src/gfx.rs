mod color;
mod text;
mod texture;

pub use color::*;
pub use text::*;
pub use texture::*;

pub(crate) use texture::decode_rgba;

/// Backend handle for an offscreen or on-screen render surface
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Backend handle for an uploaded image
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(u64);

impl TextureId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Backend handle for a loaded font face
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(u64);

impl FontId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}
