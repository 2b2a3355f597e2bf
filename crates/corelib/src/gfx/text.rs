use crate::gfx::FontId;

/// A cheap handle to a font face loaded by the backend at a fixed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    id: FontId,
    size: f32,
}

impl Font {
    #[inline]
    pub const fn new(id: FontId, size: f32) -> Self {
        Self { id, size }
    }

    #[inline]
    pub fn id(&self) -> FontId {
        self.id
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }
}
