pub mod discover;
pub mod output;

pub use discover::{discover_images, is_supported, select_images, SUPPORTED_EXTENSIONS};
pub use output::{save_image, timestamp_file_name};
