pub mod animation;
pub mod prelude;
pub mod pulse;
pub mod shapes;
pub mod ui;

#[doc(inline)]
pub use corelib::*;

#[doc(inline)]
pub use draw;
