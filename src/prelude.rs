pub use crate::animation::Animation;
pub use crate::pulse::Pulse;
pub use crate::shapes::Circle;
pub use crate::ui::{Button, ButtonStyle, MenuScreen, ToggleButton};

pub use corelib::backend::{BackendImpl, HeadlessBackend};
pub use corelib::gfx::{Color, Font, Texture};
pub use corelib::input::{KeyCode, MouseButton};
pub use corelib::math::{IntoVec2, Rect, UVec2, Vec2, distance, uvec2, vec2};
pub use corelib::{App, Event, Screen, WindowConfig};

#[cfg(feature = "logs")]
pub use corelib::app::{LogConfig, logger::init_logs};

pub use draw::Canvas;
