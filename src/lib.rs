pub mod color;
pub mod config;
pub mod error;
pub mod io;
pub mod mask;
pub mod merge;
pub mod pipeline;
pub mod tuner;

// Convenience re-exports
pub use color::{HsvRange, MaskPolarity};
pub use config::{save_bounds, Config};
pub use error::{Error, Result};
pub use io::{discover_images, save_image, select_images};
pub use mask::{load_foreground, remove_background, remove_backgrounds};
pub use merge::{merge_images, MergeMethod, MergeOptions};
pub use pipeline::{compose, compose_and_save};
pub use tuner::{Control, ExitReason, Slider, TunerCommand, TunerSession};
