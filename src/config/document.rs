use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

/// Serializes `value` as pretty JSON and replaces the file at `path` with it.
///
/// A regular (or missing) target is written through a sibling temp file that
/// is renamed over it, so a failed write leaves the old document intact.
/// Anything else (a device, a pipe) is written in place. Every write error,
/// including a short write on a full disk, is returned.
pub(crate) fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(std::io::Error::from)?;
    bytes.push(b'\n');

    let regular = match fs::metadata(path) {
        Ok(meta) => meta.is_file(),
        Err(_) => true,
    };
    if !regular {
        fs::write(path, &bytes)?;
        return Ok(());
    }

    let tmp = sibling_temp(path);
    if let Err(e) = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn sibling_temp(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config.json".to_owned());
    path.with_file_name(format!(".{name}.tmp"))
}
