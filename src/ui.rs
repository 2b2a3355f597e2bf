mod button;
mod menu;
mod toggle;

pub use button::*;
pub use menu::*;
pub use toggle::*;
