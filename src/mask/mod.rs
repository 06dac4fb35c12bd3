pub mod background;

pub use background::{load_foreground, remove_background, remove_backgrounds};
