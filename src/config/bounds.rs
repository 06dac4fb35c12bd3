use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::color::HsvRange;
use crate::config::document::write_document;
use crate::error::{Error, Result};

/// Stores `range` in the config document at `path`.
///
/// Only `LOWER_BOUND_COLOR` and `UPPER_BOUND_COLOR` are written; every other
/// key keeps its value and position. A missing file is created.
///
/// # Errors
/// - `Error::ConfigParse` if the existing file is not valid JSON.
/// - `Error::ConfigShape` if it is JSON but not an object.
pub fn save_bounds(path: &Path, range: &HsvRange) -> Result<()> {
    let mut doc = match std::fs::read_to_string(path) {
        Ok(text) => serde_json::from_str::<Value>(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Value::Object(Map::new()),
        Err(source) => {
            return Err(Error::ConfigRead { path: path.to_path_buf(), source });
        }
    };

    let Some(object) = doc.as_object_mut() else {
        return Err(Error::ConfigShape { path: path.to_path_buf() });
    };
    object.insert("LOWER_BOUND_COLOR".to_owned(), Value::from(range.lower.to_vec()));
    object.insert("UPPER_BOUND_COLOR".to_owned(), Value::from(range.upper.to_vec()));

    write_document(path, &doc)?;

    info!(path = %path.display(), lower = ?range.lower, upper = ?range.upper, "saved bounds");
    Ok(())
}
