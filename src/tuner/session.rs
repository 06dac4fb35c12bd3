//! State of one interactive tuning run.
//!
//! `TunerSession` is the context object the UI loop owns: the decoded source
//! images, the live bounds and everything needed to recompute a preview. The
//! loop feeds it `TunerCommand`s and stops when `apply` returns
//! `Control::Exit`.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use tracing::{debug, info};

use crate::color::{HsvRange, MaskPolarity};
use crate::config::{save_bounds, Config};
use crate::error::{Error, Result};
use crate::mask::remove_background;
use crate::merge::{merge_images, MergeMethod, MergeOptions};
use crate::tuner::slider::Slider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunerCommand {
    /// Move one slider.
    Set(Slider, u8),
    /// Persist the current bounds to the config document.
    Save,
    /// Explicit quit key.
    Quit,
    /// The display window went away.
    WindowClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    WindowClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit(ExitReason),
}

pub struct TunerSession {
    sources: Vec<DynamicImage>,
    range: HsvRange,
    polarity: MaskPolarity,
    method: MergeMethod,
    options: MergeOptions,
    config_path: PathBuf,
}

impl TunerSession {
    /// Decodes every image in `paths` once and seeds the bounds from `config`.
    ///
    /// # Errors
    /// Fails on the first unreadable image, on an empty path list, or when
    /// the configured merge method is unknown.
    pub fn open(paths: &[PathBuf], config: &Config, config_path: &Path) -> Result<Self> {
        let sources = paths
            .iter()
            .map(|p| {
                image::open(p).map_err(|source| Error::ImageLoad { path: p.clone(), source })
            })
            .collect::<Result<Vec<_>>>()?;
        TunerSession::from_images(sources, config, config_path)
    }

    pub fn from_images(sources: Vec<DynamicImage>, config: &Config, config_path: &Path) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::EmptyImageSet);
        }
        let method = config.merge_method()?;
        info!(images = sources.len(), method = %method, "tuner session opened");
        Ok(TunerSession {
            sources,
            range: config.range(),
            polarity: config.mask_polarity,
            method,
            options: config.merge_options(),
            config_path: config_path.to_path_buf(),
        })
    }

    pub fn range(&self) -> HsvRange {
        self.range
    }

    pub fn polarity(&self) -> MaskPolarity {
        self.polarity
    }

    pub fn method(&self) -> MergeMethod {
        self.method
    }

    pub fn image_count(&self) -> usize {
        self.sources.len()
    }

    /// Config document that `Save` writes to.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn apply(&mut self, command: TunerCommand) -> Result<Control> {
        match command {
            TunerCommand::Set(slider, value) => {
                slider.set(&mut self.range, value);
                debug!(slider = slider.key(), value, "slider moved");
                Ok(Control::Continue)
            }
            TunerCommand::Save => {
                save_bounds(&self.config_path, &self.range)?;
                Ok(Control::Continue)
            }
            TunerCommand::Quit => Ok(Control::Exit(ExitReason::Quit)),
            TunerCommand::WindowClosed => Ok(Control::Exit(ExitReason::WindowClosed)),
        }
    }

    /// Masks the whole set with the current bounds and composites it.
    pub fn render(&self) -> Result<RgbImage> {
        let foregrounds: Vec<DynamicImage> = self
            .sources
            .iter()
            .map(|img| remove_background(img, &self.range, self.polarity))
            .collect();
        merge_images(&foregrounds, self.method, &self.options)
    }
}
