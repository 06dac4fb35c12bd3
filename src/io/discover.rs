use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Extensions picked up when scanning a folder (compared lower-cased).
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Returns up to `max` image files from `folder`, sorted by file name.
///
/// # Errors
/// - `Error::FolderRead` if the folder cannot be listed.
/// - `Error::NoImages` if nothing in it has a supported extension.
pub fn discover_images(folder: &Path, max: usize) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder).map_err(|source| Error::FolderRead {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_supported(p))
        .collect();

    if paths.is_empty() {
        return Err(Error::NoImages { path: folder.to_path_buf() });
    }

    paths.sort();
    if paths.len() > max {
        debug!(found = paths.len(), max, "keeping the first images only");
        paths.truncate(max);
    }
    Ok(paths)
}

/// Picks the working set: explicit paths win, otherwise `folder` is scanned.
/// Either way at most `max` paths are returned.
pub fn select_images(explicit: &[PathBuf], folder: &Path, max: usize) -> Result<Vec<PathBuf>> {
    if explicit.is_empty() {
        return discover_images(folder, max);
    }
    if explicit.len() > max {
        warn!(given = explicit.len(), max, "too many images given; extra ones are ignored");
    }
    Ok(explicit.iter().take(max).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allowlist() {
        assert!(is_supported(Path::new("a/b.JPG")));
        assert!(is_supported(Path::new("x.jpeg")));
        assert!(is_supported(Path::new("x.gif")));
        assert!(!is_supported(Path::new("x.tiff")));
        assert!(!is_supported(Path::new("png")));
    }

    #[test]
    fn test_discovers_sorted_and_capped() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.jpg", "notes.txt", "b.BMP", "d.gif"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let found = discover_images(dir.path(), 3).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.BMP", "c.png"]);
    }

    #[test]
    fn test_folder_without_images() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.md"), b"").unwrap();
        assert!(matches!(discover_images(dir.path(), 4), Err(Error::NoImages { .. })));
    }

    #[test]
    fn test_missing_folder() {
        assert!(matches!(
            discover_images(Path::new("no/such/folder"), 4),
            Err(Error::FolderRead { .. })
        ));
    }

    #[test]
    fn test_explicit_paths_take_precedence() {
        let explicit: Vec<PathBuf> = ["1.png", "2.png", "3.png"].iter().map(PathBuf::from).collect();
        let picked = select_images(&explicit, Path::new("no/such/folder"), 2).unwrap();
        assert_eq!(picked, explicit[..2].to_vec());
    }
}
