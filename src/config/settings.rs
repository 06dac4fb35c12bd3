use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::{HsvRange, MaskPolarity};
use crate::config::document::write_document;
use crate::error::{Error, Result};
use crate::merge::{MergeMethod, MergeOptions, DEFAULT_GRID_OUTPUT};

/// Where the binaries look for the config document by default.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// The JSON config document.
///
/// Keys are upper-case (`MAX_IMAGES`, `LOWER_BOUND_COLOR`, ...). Every key is
/// optional; absent keys take the defaults below, so an empty object is a
/// valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    /// Upper limit on how many images are processed.
    pub max_images: usize,
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    /// File extension of the saved composite; selects the encoder.
    pub output_format: String,
    /// Kept as text so that an unrecognized name survives loading and is
    /// rejected where it is used; see `merge_method()`.
    pub merge_method: String,
    pub lower_bound_color: [u8; 3],
    pub upper_bound_color: [u8; 3],
    pub mask_polarity: MaskPolarity,
    pub placeholder_image: Option<PathBuf>,
    pub grid_output_size: [u32; 2],
}

impl Default for Config {
    fn default() -> Self {
        let range = HsvRange::default();
        Config {
            max_images: 4,
            input_folder: PathBuf::from("images"),
            output_folder: PathBuf::from("combined_image"),
            output_format: "jpg".to_owned(),
            merge_method: MergeMethod::Weighted.as_str().to_owned(),
            lower_bound_color: range.lower,
            upper_bound_color: range.upper,
            mask_polarity: MaskPolarity::default(),
            placeholder_image: None,
            grid_output_size: [DEFAULT_GRID_OUTPUT.0, DEFAULT_GRID_OUTPUT.1],
        }
    }
}

impl Config {
    /// Reads `path`; a missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Config> {
        let file = std::fs::File::open(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`, falling back to `Config::default()` (with a warning)
    /// when the file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Config {
        match Config::load(path) {
            Ok(config) => config,
            Err(Error::ConfigRead { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found; using defaults");
                Config::default()
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Config::default()
            }
        }
    }

    /// Writes the whole document, pretty-printed. The previous file is only
    /// replaced once the new one is fully written.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_document(path, self)
    }

    /// # Errors
    /// `Error::UnknownMethod` if `MERGE_METHOD` names no known strategy.
    pub fn merge_method(&self) -> Result<MergeMethod> {
        self.merge_method.parse()
    }

    pub fn range(&self) -> HsvRange {
        HsvRange::new(self.lower_bound_color, self.upper_bound_color)
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            placeholder: self.placeholder_image.clone(),
            grid_output: (self.grid_output_size[0], self.grid_output_size[1]),
        }
    }
}
