pub mod clock;
pub mod constants;
pub mod countdown;
pub mod effects;
pub mod engine;
pub mod lane;
pub mod preroll;

pub use countdown::*;
pub use effects::*;
pub use engine::*;
pub use lane::*;
