pub mod bounds;
mod document;
pub mod settings;

pub use bounds::save_bounds;
pub use settings::{Config, DEFAULT_CONFIG_PATH};
