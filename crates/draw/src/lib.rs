mod canvas;
mod shapes;

pub use canvas::*;
pub use shapes::*;
