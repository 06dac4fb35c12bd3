//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An input image is missing or could not be decoded.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot read folder {path}: {source}")]
    FolderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The folder exists but holds no file with a supported extension.
    #[error("no supported image files (jpg, jpeg, png, bmp, gif) found in {path}")]
    NoImages { path: PathBuf },

    #[error("no images to merge")]
    EmptyImageSet,

    /// Merge method name outside `weighted | simple | grid`.
    #[error("unknown merge method {0:?} (expected weighted, simple or grid)")]
    UnknownMethod(String),

    #[error("grid layout takes 1 to 9 images, got {count}")]
    GridCount { count: usize },

    #[error("grid layout needs a placeholder image but none is configured")]
    PlaceholderMissing,

    #[error("failed to load placeholder image {path}: {source}")]
    Placeholder {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("resize failed: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("resize buffer rejected: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config document exists but its top level is not a JSON object.
    #[error("config {path} is not a JSON object; refusing to overwrite it")]
    ConfigShape { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
