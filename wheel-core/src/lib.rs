pub mod fit;
pub mod geometry;
pub mod model;
pub mod palette;
pub mod render;
pub mod spin;
pub mod surface;

pub use fit::fit_label;
pub use model::{Item, SpinResult};
pub use render::render;
pub use spin::{DEFAULT_SPIN_DURATION_MS, Tick, WheelSession};
pub use surface::{Surface, TextAlign};
