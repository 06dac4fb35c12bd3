pub mod session;
pub mod slider;

pub use session::{Control, ExitReason, TunerCommand, TunerSession};
pub use slider::{Slider, SLIDER_MAX};
