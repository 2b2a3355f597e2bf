use crate::gfx::Color;
use crate::math::{UVec2, uvec2};

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub size: UVec2,
    pub logical_size: Option<UVec2>,
    pub frame_rate: u32,
    pub clear_color: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Screenkit Window".to_string(),
            size: uvec2(800, 600),
            logical_size: None,
            frame_rate: 30,
            clear_color: Color::rgb_u8(0, 0, 100),
        }
    }
}

impl WindowConfig {
    /// Set the window's title
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the window's size in real on-screen pixels
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = uvec2(width, height);
        self
    }

    /// Set the resolution the game logic draws to. When smaller than the
    /// window size the frame is upscaled at present time, enlarging each
    /// logical pixel by the integer scale factor
    pub fn logical_size(mut self, width: u32, height: u32) -> Self {
        self.logical_size = Some(uvec2(width, height));
        self
    }

    /// Set the target frame rate, `0` leaves the loop uncapped
    pub fn frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Set the color used by the default `update` to fill the frame
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }
}
