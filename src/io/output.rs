use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};

/// `YYYYMMDD_HHMMSS.<ext>` for the given moment.
pub fn timestamp_file_name(now: DateTime<Local>, extension: &str) -> String {
    format!("{}.{}", now.format("%Y%m%d_%H%M%S"), extension.trim_start_matches('.'))
}

/// Writes `image` into `folder` under a timestamp name, creating the folder
/// if needed. The encoder is chosen from `extension`. A second save within
/// the same second replaces the first.
pub fn save_image(image: &RgbImage, folder: &Path, extension: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(folder)?;
    let path = folder.join(timestamp_file_name(Local::now(), extension));

    image.save(&path).map_err(|source| Error::ImageSave {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "saved composite");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use image::Rgb;

    #[test]
    fn test_timestamp_format() {
        let t = Local.with_ymd_and_hms(2024, 1, 5, 7, 8, 9).unwrap();
        assert_eq!(timestamp_file_name(t, "jpg"), "20240105_070809.jpg");
        assert_eq!(timestamp_file_name(t, ".png"), "20240105_070809.png");
    }

    #[test]
    fn test_save_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested/out");
        let img = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));

        let path = save_image(&img, &out_dir, "png").unwrap();
        assert!(path.starts_with(&out_dir));
        assert_eq!(path.extension().unwrap(), "png");

        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back, img);
    }

    #[test]
    fn test_unknown_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::new(1, 1);
        assert!(matches!(
            save_image(&img, dir.path(), "xyz"),
            Err(Error::ImageSave { .. })
        ));
    }
}
